//! Doctor↔patient assignment edges.
//!
//! Creation leans on the UNIQUE(doctor_id, patient_id) constraint instead
//! of a preceding read, so concurrent identical requests resolve to exactly
//! one inserted row; the losers get the normal Duplicate outcome.

use chrono::Utc;
use rusqlite::{params, Connection, Row};

use carelink_core::errors::{CareError, CareResult};
use carelink_core::models::{Assignment, AssignmentOutcome, Role, User};

use crate::queries::{parse_dt, user_ops, OptionalRow};
use crate::to_storage_err;

/// Insert an assignment edge. Both endpoints must exist with the matching
/// roles. Returns `Duplicate` when the pair already has an edge.
pub fn create_assignment(
    conn: &Connection,
    doctor_id: &str,
    patient_id: &str,
) -> CareResult<AssignmentOutcome> {
    user_ops::require_role(conn, doctor_id, Role::Doctor)?;
    user_ops::require_role(conn, patient_id, Role::Patient)?;

    let id = uuid::Uuid::new_v4().to_string();
    let result = conn.execute(
        "INSERT INTO assignments (id, doctor_id, patient_id, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![id, doctor_id, patient_id, Utc::now().to_rfc3339()],
    );
    match result {
        Ok(_) => Ok(AssignmentOutcome::Created(id)),
        Err(e) if crate::is_unique_violation(&e) => Ok(AssignmentOutcome::Duplicate),
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// Unconditional delete by id. No cascading side effects on readings or
/// alerts.
pub fn delete_assignment(conn: &Connection, id: &str) -> CareResult<()> {
    let rows = conn
        .execute("DELETE FROM assignments WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    if rows == 0 {
        return Err(CareError::AssignmentNotFound { id: id.to_string() });
    }
    Ok(())
}

/// Find the edge for a (doctor, patient) pair, if one exists.
pub fn find_assignment(
    conn: &Connection,
    doctor_id: &str,
    patient_id: &str,
) -> CareResult<Option<Assignment>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, doctor_id, patient_id, created_at FROM assignments
             WHERE doctor_id = ?1 AND patient_id = ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let result = stmt
        .query_row(params![doctor_id, patient_id], |row| {
            Ok(row_to_assignment(row))
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

/// Patients under a doctor's care, via the assignment edges.
pub fn patients_of_doctor(conn: &Connection, doctor_id: &str) -> CareResult<Vec<User>> {
    collect_joined_users(
        conn,
        "SELECT u.id, u.username, u.full_name, u.password_hash, u.role, u.status, u.created_at
         FROM users u
         JOIN assignments a ON a.patient_id = u.id
         WHERE a.doctor_id = ?1
         ORDER BY u.full_name",
        doctor_id,
    )
}

/// Doctors caring for a patient, via the assignment edges.
pub fn doctors_of_patient(conn: &Connection, patient_id: &str) -> CareResult<Vec<User>> {
    collect_joined_users(
        conn,
        "SELECT u.id, u.username, u.full_name, u.password_hash, u.role, u.status, u.created_at
         FROM users u
         JOIN assignments a ON a.doctor_id = u.id
         WHERE a.patient_id = ?1
         ORDER BY u.full_name",
        patient_id,
    )
}

fn collect_joined_users(conn: &Connection, sql: &str, id: &str) -> CareResult<Vec<User>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![id], |row| Ok(user_ops::row_to_user(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut users = Vec::new();
    for row in rows {
        users.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(users)
}

fn row_to_assignment(row: &Row<'_>) -> CareResult<Assignment> {
    let created_str: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(Assignment {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        doctor_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        patient_id: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        created_at: parse_dt(&created_str)?,
    })
}
