//! v004: admin_audit_log.

use rusqlite::Connection;

use carelink_core::errors::CareResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CareResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS admin_audit_log (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            action     TEXT NOT NULL,
            subject_id TEXT NOT NULL,
            actor      TEXT NOT NULL DEFAULT 'admin',
            details    TEXT NOT NULL DEFAULT '{}',
            timestamp  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_audit_subject ON admin_audit_log(subject_id);
        CREATE INDEX IF NOT EXISTS idx_audit_action ON admin_audit_log(action);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
