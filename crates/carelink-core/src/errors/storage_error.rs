/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("unique constraint violated on {table}")]
    UniqueViolation { table: String },

    #[error("connection lock poisoned: {message}")]
    PoolPoisoned { message: String },
}
