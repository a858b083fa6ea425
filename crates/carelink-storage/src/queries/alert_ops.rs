//! Doctor→patient alerts: create, one-way seen transition, listings.

use rusqlite::{params, Connection, Row};

use carelink_core::errors::{CareError, CareResult};
use carelink_core::models::{Alert, AlertStatus, Role};

use crate::queries::{parse_dt, user_ops, OptionalRow};
use crate::to_storage_err;

const ALERT_COLUMNS: &str = "id, doctor_id, patient_id, message, status, created_at";

/// Create an alert. Sender must be a doctor, recipient a patient.
pub fn insert_alert(conn: &Connection, alert: &Alert) -> CareResult<()> {
    user_ops::require_role(conn, &alert.doctor_id, Role::Doctor)?;
    user_ops::require_role(conn, &alert.patient_id, Role::Patient)?;
    conn.execute(
        "INSERT INTO alerts (id, doctor_id, patient_id, message, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            alert.id,
            alert.doctor_id,
            alert.patient_id,
            alert.message,
            alert.status.as_str(),
            alert.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get an alert by id.
pub fn get_alert(conn: &Connection, id: &str) -> CareResult<Option<Alert>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {ALERT_COLUMNS} FROM alerts WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let result = stmt
        .query_row(params![id], |row| Ok(row_to_alert(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

/// Mark an alert seen by its recipient. The transition is one-way; marking
/// an already-seen alert again is a no-op success. Only the recipient
/// patient may perform it.
pub fn mark_seen(conn: &Connection, alert_id: &str, patient_id: &str) -> CareResult<()> {
    let Some(alert) = get_alert(conn, alert_id)? else {
        return Err(CareError::AlertNotFound {
            id: alert_id.to_string(),
        });
    };
    if alert.patient_id != patient_id {
        return Err(CareError::NotAlertRecipient {
            alert_id: alert_id.to_string(),
            user_id: patient_id.to_string(),
        });
    }
    if alert.status == AlertStatus::Seen {
        return Ok(());
    }
    conn.execute(
        "UPDATE alerts SET status = 'seen' WHERE id = ?1 AND status = 'sent'",
        params![alert_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Alerts addressed to a patient, newest first.
pub fn alerts_for_patient(conn: &Connection, patient_id: &str) -> CareResult<Vec<Alert>> {
    collect_alerts(
        conn,
        &format!(
            "SELECT {ALERT_COLUMNS} FROM alerts
             WHERE patient_id = ?1 ORDER BY created_at DESC"
        ),
        patient_id,
    )
}

/// Alerts sent by a doctor, newest first.
pub fn alerts_from_doctor(conn: &Connection, doctor_id: &str) -> CareResult<Vec<Alert>> {
    collect_alerts(
        conn,
        &format!(
            "SELECT {ALERT_COLUMNS} FROM alerts
             WHERE doctor_id = ?1 ORDER BY created_at DESC"
        ),
        doctor_id,
    )
}

/// Number of unseen alerts for a patient.
pub fn unseen_count(conn: &Connection, patient_id: &str) -> CareResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM alerts WHERE patient_id = ?1 AND status = 'sent'",
            params![patient_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

fn collect_alerts(conn: &Connection, sql: &str, id: &str) -> CareResult<Vec<Alert>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![id], |row| Ok(row_to_alert(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut alerts = Vec::new();
    for row in rows {
        alerts.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(alerts)
}

fn row_to_alert(row: &Row<'_>) -> CareResult<Alert> {
    let status_str: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let created_str: String = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;
    let status = AlertStatus::parse(&status_str)
        .ok_or_else(|| to_storage_err(format!("unknown alert status '{status_str}'")))?;
    Ok(Alert {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        doctor_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        patient_id: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        message: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        status,
        created_at: parse_dt(&created_str)?,
    })
}
