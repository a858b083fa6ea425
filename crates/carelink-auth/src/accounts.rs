//! Registration and login over an `IUserStore`.

use chrono::Utc;

use carelink_core::errors::{CareError, CareResult};
use carelink_core::models::{AccountStatus, NewUser, Role, User};
use carelink_core::traits::IUserStore;

use crate::hasher::CredentialHasher;

/// Register a new account. Doctors start pending admin approval; admins and
/// patients are approved at creation. A taken username surfaces as the
/// storage layer's unique violation.
pub fn register_user(
    store: &dyn IUserStore,
    hasher: &CredentialHasher,
    new_user: NewUser,
    password: &str,
) -> CareResult<User> {
    let status = match new_user.role {
        Role::Doctor => AccountStatus::Pending,
        Role::Admin | Role::Patient => AccountStatus::Approved,
    };
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: new_user.username,
        full_name: new_user.full_name,
        password_hash: hasher.hash(password)?,
        role: new_user.role,
        status,
        created_at: Utc::now(),
    };
    store.create_user(&user)?;
    tracing::info!(user_id = %user.id, role = %user.role, "registered user");
    Ok(user)
}

/// Authenticate by username and password.
///
/// Unknown usernames and wrong passwords both return `InvalidCredentials`
/// so callers cannot enumerate accounts; a dummy hash is verified for
/// unknown users to keep the two paths comparable in cost. Pending doctors
/// are refused with `DoctorNotApproved`.
pub fn authenticate(
    store: &dyn IUserStore,
    hasher: &CredentialHasher,
    username: &str,
    password: &str,
) -> CareResult<User> {
    let Some(user) = store.get_user_by_username(username)? else {
        let dummy = hasher.hash("dummy-password")?;
        let _ = hasher.verify(password, &dummy);
        return Err(CareError::InvalidCredentials);
    };

    if !hasher.verify(password, &user.password_hash)? {
        return Err(CareError::InvalidCredentials);
    }
    if user.role == Role::Doctor && user.status == AccountStatus::Pending {
        return Err(CareError::DoctorNotApproved { id: user.id });
    }
    Ok(user)
}
