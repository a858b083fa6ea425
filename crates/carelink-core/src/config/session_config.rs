use serde::{Deserialize, Serialize};

use super::defaults;

/// Session lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sessions idle longer than this are removed by cleanup (seconds).
    pub idle_timeout_secs: u64,
    /// Sessions older than this are removed regardless of activity (seconds).
    pub absolute_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: defaults::DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
            absolute_timeout_secs: defaults::DEFAULT_SESSION_ABSOLUTE_TIMEOUT_SECS,
        }
    }
}
