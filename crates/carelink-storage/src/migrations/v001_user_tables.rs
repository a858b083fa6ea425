//! v001: users.

use rusqlite::Connection;

use carelink_core::errors::CareResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CareResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id            TEXT PRIMARY KEY,
            username      TEXT NOT NULL UNIQUE,
            full_name     TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            role          TEXT NOT NULL CHECK (role IN ('admin', 'doctor', 'patient')),
            status        TEXT NOT NULL DEFAULT 'approved'
                          CHECK (status IN ('pending', 'approved')),
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_users_role ON users(role);
        CREATE INDEX IF NOT EXISTS idx_users_role_status ON users(role, status);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
