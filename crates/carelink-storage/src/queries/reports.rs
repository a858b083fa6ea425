//! Dashboard aggregates: COUNT and GROUP BY queries for the admin views.

use rusqlite::Connection;

use carelink_core::errors::CareResult;
use carelink_core::models::{AlertStatus, Role};

use crate::to_storage_err;

/// User counts grouped by role.
pub fn user_counts_by_role(conn: &Connection) -> CareResult<Vec<(Role, usize)>> {
    let mut stmt = conn
        .prepare("SELECT role, COUNT(*) FROM users GROUP BY role ORDER BY role")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut counts = Vec::new();
    for row in rows {
        let (role_str, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let role = Role::parse(&role_str)
            .ok_or_else(|| to_storage_err(format!("unknown role '{role_str}'")))?;
        counts.push((role, count as usize));
    }
    Ok(counts)
}

/// Doctors awaiting approval.
pub fn pending_doctor_count(conn: &Connection) -> CareResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM users WHERE role = 'doctor' AND status = 'pending'",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Alert counts grouped by status.
pub fn alert_counts_by_status(conn: &Connection) -> CareResult<Vec<(AlertStatus, usize)>> {
    let mut stmt = conn
        .prepare("SELECT status, COUNT(*) FROM alerts GROUP BY status ORDER BY status")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut counts = Vec::new();
    for row in rows {
        let (status_str, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let status = AlertStatus::parse(&status_str)
            .ok_or_else(|| to_storage_err(format!("unknown alert status '{status_str}'")))?;
        counts.push((status, count as usize));
    }
    Ok(counts)
}

/// Reading counts per patient, most active first.
pub fn reading_counts_per_patient(conn: &Connection) -> CareResult<Vec<(String, usize)>> {
    let mut stmt = conn
        .prepare(
            "SELECT patient_id, COUNT(*) FROM health_readings
             GROUP BY patient_id ORDER BY COUNT(*) DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut counts = Vec::new();
    for row in rows {
        let (patient_id, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        counts.push((patient_id, count as usize));
    }
    Ok(counts)
}
