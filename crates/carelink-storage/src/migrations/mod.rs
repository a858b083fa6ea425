//! Versioned schema migrations, recorded in `schema_migrations`.

mod v001_user_tables;
mod v002_reading_tables;
mod v003_alert_assignment_tables;
mod v004_audit_tables;

use rusqlite::{params, Connection};

use carelink_core::errors::{CareError, CareResult, StorageError};

use crate::to_storage_err;

type Migration = (u32, fn(&Connection) -> CareResult<()>);

const MIGRATIONS: &[Migration] = &[
    (1, v001_user_tables::migrate),
    (2, v002_reading_tables::migrate),
    (3, v003_alert_assignment_tables::migrate),
    (4, v004_audit_tables::migrate),
];

/// Apply all unapplied migrations in order.
pub fn run_migrations(conn: &Connection) -> CareResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        if is_applied(conn, *version)? {
            continue;
        }
        migrate(conn).map_err(|e| {
            CareError::Storage(StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })
        })?;
        conn.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::info!(version, "applied schema migration");
    }
    Ok(())
}

/// Current schema version (0 when no migration has run).
pub fn schema_version(conn: &Connection) -> CareResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn is_applied(conn: &Connection, version: u32) -> CareResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM schema_migrations WHERE version = ?1",
            params![version],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count > 0)
}
