//! Workspace configuration, loadable from TOML.

mod database_config;
mod session_config;

pub use database_config::DatabaseConfig;
pub use session_config::SessionConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CareError, CareResult};

/// Default values shared by the config structs.
pub(crate) mod defaults {
    pub const DEFAULT_DB_PATH: &str = "carelink.db";
    pub const DEFAULT_READ_POOL_SIZE: usize = 4;
    pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 30 * 60;
    pub const DEFAULT_SESSION_ABSOLUTE_TIMEOUT_SECS: u64 = 12 * 60 * 60;
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    pub database: DatabaseConfig,
    pub session: SessionConfig,
}

impl CareConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults; a missing file is an error.
    pub fn load(path: &Path) -> CareResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CareError::Config {
            reason: format!("read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| CareError::Config {
            reason: format!("parse {}: {e}", path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_keys_missing() {
        let config: CareConfig = toml::from_str("").unwrap();
        assert_eq!(config.database.read_pool_size, 4);
        assert_eq!(config.session.idle_timeout_secs, 30 * 60);
    }

    #[test]
    fn load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[database]\npath = \"/tmp/care.db\"\n\n[session]\nidle_timeout_secs = 60"
        )
        .unwrap();

        let config = CareConfig::load(file.path()).unwrap();
        assert_eq!(config.database.path.to_str(), Some("/tmp/care.db"));
        assert_eq!(config.database.read_pool_size, 4, "unset key falls back");
        assert_eq!(config.session.idle_timeout_secs, 60);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = CareConfig::load(std::path::Path::new("/no/such/file.toml")).unwrap_err();
        assert!(matches!(err, CareError::Config { .. }));
    }
}
