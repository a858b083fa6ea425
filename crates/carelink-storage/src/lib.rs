//! # carelink-storage
//!
//! SQLite persistence for the CareLink domain: a single-writer connection
//! pool, versioned migrations, parameterized query modules, an admin audit
//! log, and the `StorageEngine` implementing the carelink-core traits.
//!
//! Every statement is parameterized; no SQL is ever built from user input
//! by string interpolation.

pub mod audit;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use carelink_core::errors::{CareError, StorageError};

/// Wrap a low-level SQLite failure message into the workspace error type.
pub(crate) fn to_storage_err(message: String) -> CareError {
    CareError::Storage(StorageError::Sqlite { message })
}

/// Whether a rusqlite error is a UNIQUE constraint violation. Used where a
/// duplicate row is a normal outcome rather than a failure.
pub(crate) fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
