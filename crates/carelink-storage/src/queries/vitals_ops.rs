//! Append-only health reading history.

use rusqlite::{params, Connection, Row};

use carelink_core::errors::CareResult;
use carelink_core::models::{HealthReading, Role, Vitals};

use crate::queries::{parse_dt, user_ops, OptionalRow};
use crate::to_storage_err;

const READING_COLUMNS: &str = "id, patient_id, systolic, diastolic, sugar, heart_rate, recorded_at";

/// Record a reading. The referenced user must exist with role=patient.
pub fn insert_reading(conn: &Connection, reading: &HealthReading) -> CareResult<()> {
    user_ops::require_role(conn, &reading.patient_id, Role::Patient)?;
    conn.execute(
        "INSERT INTO health_readings
            (id, patient_id, systolic, diastolic, sugar, heart_rate, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            reading.id,
            reading.patient_id,
            reading.vitals.systolic,
            reading.vitals.diastolic,
            reading.vitals.sugar,
            reading.vitals.heart_rate,
            reading.recorded_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Full history for a patient, newest first.
pub fn reading_history(conn: &Connection, patient_id: &str) -> CareResult<Vec<HealthReading>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {READING_COLUMNS} FROM health_readings
             WHERE patient_id = ?1 ORDER BY recorded_at DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![patient_id], |row| Ok(row_to_reading(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut readings = Vec::new();
    for row in rows {
        readings.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(readings)
}

/// Most recent reading for a patient, if any.
pub fn latest_reading(conn: &Connection, patient_id: &str) -> CareResult<Option<HealthReading>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {READING_COLUMNS} FROM health_readings
             WHERE patient_id = ?1 ORDER BY recorded_at DESC LIMIT 1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let result = stmt
        .query_row(params![patient_id], |row| Ok(row_to_reading(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

fn row_to_reading(row: &Row<'_>) -> CareResult<HealthReading> {
    let recorded_str: String = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(HealthReading {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        patient_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        vitals: Vitals {
            systolic: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
            diastolic: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
            sugar: row.get(4).map_err(|e| to_storage_err(e.to_string()))?,
            heart_rate: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        },
        recorded_at: parse_dt(&recorded_str)?,
    })
}
