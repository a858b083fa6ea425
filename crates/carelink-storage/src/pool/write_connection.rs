//! The single write connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use carelink_core::errors::{CareError, CareResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Owns the one connection allowed to write. All mutations funnel through
/// `with_conn_sync`, so writers never race each other in-process; cross-
/// process writers are serialized by SQLite's own locking.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the write connection for the given database file.
    pub fn open(path: &Path) -> CareResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> CareResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> CareResult<T>
    where
        F: FnOnce(&Connection) -> CareResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            CareError::Storage(StorageError::PoolPoisoned {
                message: e.to_string(),
            })
        })?;
        f(&guard)
    }
}
