//! Append-only log of admin mutations.

use rusqlite::{params, Connection};

use carelink_core::errors::CareResult;

use crate::to_storage_err;

/// Writes admin actions to `admin_audit_log`. Callers treat emission
/// failure as non-fatal and log it instead of failing the mutation.
pub struct AuditLogger;

impl AuditLogger {
    /// Record one admin action against a subject row.
    pub fn log(
        conn: &Connection,
        action: &str,
        subject_id: &str,
        details: serde_json::Value,
    ) -> CareResult<()> {
        conn.execute(
            "INSERT INTO admin_audit_log (action, subject_id, details) VALUES (?1, ?2, ?3)",
            params![action, subject_id, details.to_string()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    }

    /// Number of audit entries for a subject.
    pub fn count_for_subject(conn: &Connection, subject_id: &str) -> CareResult<usize> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM admin_audit_log WHERE subject_id = ?1",
                params![subject_id],
                |row| row.get(0),
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(count as usize)
    }
}
