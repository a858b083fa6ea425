//! v003: alerts, assignments.
//!
//! Assignments carry the UNIQUE(doctor_id, patient_id) constraint that
//! makes duplicate creation safe under concurrent identical requests; the
//! insert path maps the violation to a normal Duplicate outcome. Alerts,
//! like readings, are retained as history when accounts are removed.

use rusqlite::Connection;

use carelink_core::errors::CareResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CareResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS alerts (
            id         TEXT PRIMARY KEY,
            doctor_id  TEXT NOT NULL,
            patient_id TEXT NOT NULL,
            message    TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'sent' CHECK (status IN ('sent', 'seen')),
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_alerts_patient ON alerts(patient_id, status);
        CREATE INDEX IF NOT EXISTS idx_alerts_doctor ON alerts(doctor_id);

        CREATE TABLE IF NOT EXISTS assignments (
            id         TEXT PRIMARY KEY,
            doctor_id  TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            patient_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            UNIQUE (doctor_id, patient_id)
        );

        CREATE INDEX IF NOT EXISTS idx_assignments_patient ON assignments(patient_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
