//! v002: health_readings.
//!
//! No foreign key on patient_id: readings are append-only history and are
//! retained even if the account is later removed.

use rusqlite::Connection;

use carelink_core::errors::CareResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> CareResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS health_readings (
            id          TEXT PRIMARY KEY,
            patient_id  TEXT NOT NULL,
            systolic    INTEGER NOT NULL,
            diastolic   INTEGER NOT NULL,
            sugar       REAL NOT NULL,
            heart_rate  INTEGER NOT NULL,
            recorded_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_readings_patient
            ON health_readings(patient_id, recorded_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
