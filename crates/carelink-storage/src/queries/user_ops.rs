//! Insert, lookup, approval, and delete for user accounts.
//!
//! There is no update path for `role`: it is immutable after registration.

use rusqlite::{params, Connection, Row};

use carelink_core::errors::{CareError, CareResult, StorageError};
use carelink_core::models::{AccountStatus, Role, User};

use crate::queries::{parse_dt, OptionalRow};
use crate::to_storage_err;

const USER_COLUMNS: &str = "id, username, full_name, password_hash, role, status, created_at";

/// Insert a new account. A taken username surfaces as `UniqueViolation`.
pub fn insert_user(conn: &Connection, user: &User) -> CareResult<()> {
    conn.execute(
        "INSERT INTO users (id, username, full_name, password_hash, role, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user.id,
            user.username,
            user.full_name,
            user.password_hash,
            user.role.as_str(),
            user.status.as_str(),
            user.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| {
        if crate::is_unique_violation(&e) {
            CareError::Storage(StorageError::UniqueViolation {
                table: "users".to_string(),
            })
        } else {
            to_storage_err(e.to_string())
        }
    })?;
    Ok(())
}

/// Get a user by id.
pub fn get_user(conn: &Connection, id: &str) -> CareResult<Option<User>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let result = stmt
        .query_row(params![id], |row| Ok(row_to_user(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

/// Get a user by login name.
pub fn get_user_by_username(conn: &Connection, username: &str) -> CareResult<Option<User>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let result = stmt
        .query_row(params![username], |row| Ok(row_to_user(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    result.transpose()
}

/// All users with a role, ordered by registration time.
pub fn list_users_by_role(conn: &Connection, role: Role) -> CareResult<Vec<User>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = ?1 ORDER BY created_at"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    collect_users(&mut stmt, params![role.as_str()])
}

/// Doctors awaiting admin approval.
pub fn list_pending_doctors(conn: &Connection) -> CareResult<Vec<User>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE role = 'doctor' AND status = 'pending'
             ORDER BY created_at"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    collect_users(&mut stmt, params![])
}

/// Approve a doctor account. Approving an already-approved doctor is a
/// no-op success; non-doctors are refused.
pub fn approve_doctor(conn: &Connection, id: &str) -> CareResult<()> {
    let Some(user) = get_user(conn, id)? else {
        return Err(CareError::UserNotFound { id: id.to_string() });
    };
    if user.role != Role::Doctor {
        return Err(CareError::RoleMismatch {
            id: id.to_string(),
            expected: Role::Doctor,
            actual: user.role,
        });
    }
    conn.execute(
        "UPDATE users SET status = 'approved' WHERE id = ?1",
        params![id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Delete an account (admin reject). Assignments referencing the user are
/// removed by the schema's ON DELETE CASCADE; readings and alerts stay.
pub fn delete_user(conn: &Connection, id: &str) -> CareResult<()> {
    let rows = conn
        .execute("DELETE FROM users WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    if rows == 0 {
        return Err(CareError::UserNotFound { id: id.to_string() });
    }
    Ok(())
}

/// Fetch a user and require a specific role.
pub(crate) fn require_role(conn: &Connection, id: &str, expected: Role) -> CareResult<User> {
    let Some(user) = get_user(conn, id)? else {
        return Err(CareError::UserNotFound { id: id.to_string() });
    };
    if user.role != expected {
        return Err(CareError::RoleMismatch {
            id: id.to_string(),
            expected,
            actual: user.role,
        });
    }
    Ok(user)
}

fn collect_users(
    stmt: &mut rusqlite::Statement<'_>,
    params: impl rusqlite::Params,
) -> CareResult<Vec<User>> {
    let rows = stmt
        .query_map(params, |row| Ok(row_to_user(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut users = Vec::new();
    for row in rows {
        users.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(users)
}

/// Parse a row from the users table.
pub(crate) fn row_to_user(row: &Row<'_>) -> CareResult<User> {
    let role_str: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let status_str: String = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;
    let created_str: String = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;

    let role = Role::parse(&role_str)
        .ok_or_else(|| to_storage_err(format!("unknown role '{role_str}'")))?;
    let status = AccountStatus::parse(&status_str)
        .ok_or_else(|| to_storage_err(format!("unknown status '{status_str}'")))?;

    Ok(User {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        username: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        full_name: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        password_hash: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        role,
        status,
        created_at: parse_dt(&created_str)?,
    })
}
