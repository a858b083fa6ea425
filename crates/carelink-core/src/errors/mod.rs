//! Error types shared across the workspace.

mod storage_error;

pub use storage_error::StorageError;

use crate::models::Role;

/// Result alias used throughout the workspace.
pub type CareResult<T> = Result<T, CareError>;

/// Top-level error for all CareLink operations.
#[derive(Debug, thiserror::Error)]
pub enum CareError {
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    #[error("alert not found: {id}")]
    AlertNotFound { id: String },

    #[error("assignment not found: {id}")]
    AssignmentNotFound { id: String },

    #[error("user {id} has role {actual}, expected {expected}")]
    RoleMismatch {
        id: String,
        expected: Role,
        actual: Role,
    },

    #[error("user {user_id} is not the recipient of alert {alert_id}")]
    NotAlertRecipient { alert_id: String, user_id: String },

    #[error("doctor account {id} is pending admin approval")]
    DoctorNotApproved { id: String },

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("credential hashing failed: {reason}")]
    CredentialHash { reason: String },

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
