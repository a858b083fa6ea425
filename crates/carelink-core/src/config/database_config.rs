use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// SQLite storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Number of read connections in the pool.
    pub read_pool_size: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_DB_PATH),
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
        }
    }
}
