use crate::errors::CareResult;
use crate::models::{
    Alert, AlertStatus, Assignment, AssignmentOutcome, HealthReading, Role, User,
};

/// Account persistence. Role is immutable: there is deliberately no
/// operation that changes it after creation.
pub trait IUserStore: Send + Sync {
    fn create_user(&self, user: &User) -> CareResult<()>;
    fn get_user(&self, id: &str) -> CareResult<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> CareResult<Option<User>>;
    fn list_users_by_role(&self, role: Role) -> CareResult<Vec<User>>;
    fn list_pending_doctors(&self) -> CareResult<Vec<User>>;

    /// Approve a pending doctor. Fails with `UserNotFound` for unknown ids,
    /// `RoleMismatch` for non-doctors.
    fn approve_doctor(&self, id: &str) -> CareResult<()>;

    /// Delete an account (admin reject). Assignments referencing the user
    /// are removed; readings and alerts are retained as history.
    fn delete_user(&self, id: &str) -> CareResult<()>;
}

/// Append-only vital-sign history.
pub trait IVitalsStore: Send + Sync {
    /// Record a reading. The referenced user must have role=patient.
    fn insert_reading(&self, reading: &HealthReading) -> CareResult<()>;

    /// Full history for a patient, newest first.
    fn reading_history(&self, patient_id: &str) -> CareResult<Vec<HealthReading>>;

    /// Most recent reading for a patient, if any.
    fn latest_reading(&self, patient_id: &str) -> CareResult<Option<HealthReading>>;
}

/// Doctor→patient alert persistence.
pub trait IAlertStore: Send + Sync {
    /// Create an alert. Sender must be a doctor, recipient a patient.
    fn create_alert(&self, alert: &Alert) -> CareResult<()>;

    fn get_alert(&self, id: &str) -> CareResult<Option<Alert>>;

    /// Mark an alert seen by its recipient. Only the recipient patient may
    /// do this; marking an already-seen alert again is a no-op success.
    fn mark_seen(&self, alert_id: &str, patient_id: &str) -> CareResult<()>;

    /// Alerts addressed to a patient, newest first.
    fn alerts_for_patient(&self, patient_id: &str) -> CareResult<Vec<Alert>>;

    /// Alerts sent by a doctor, newest first.
    fn alerts_from_doctor(&self, doctor_id: &str) -> CareResult<Vec<Alert>>;

    /// Number of unseen alerts for a patient.
    fn unseen_count(&self, patient_id: &str) -> CareResult<usize>;
}

/// Admin-managed doctor↔patient edges.
pub trait IAssignmentStore: Send + Sync {
    /// Insert an edge, relying on the storage uniqueness constraint to
    /// report an existing pair as `Duplicate`.
    fn create_assignment(&self, doctor_id: &str, patient_id: &str)
        -> CareResult<AssignmentOutcome>;

    /// Unconditional delete by id; `AssignmentNotFound` when no row.
    fn delete_assignment(&self, id: &str) -> CareResult<()>;

    fn find_assignment(&self, doctor_id: &str, patient_id: &str)
        -> CareResult<Option<Assignment>>;

    fn patients_of_doctor(&self, doctor_id: &str) -> CareResult<Vec<User>>;
    fn doctors_of_patient(&self, patient_id: &str) -> CareResult<Vec<User>>;
}

/// Dashboard aggregates.
pub trait IReportStore: Send + Sync {
    fn user_counts_by_role(&self) -> CareResult<Vec<(Role, usize)>>;
    fn pending_doctor_count(&self) -> CareResult<usize>;
    fn alert_counts_by_status(&self) -> CareResult<Vec<(AlertStatus, usize)>>;
    fn reading_counts_per_patient(&self) -> CareResult<Vec<(String, usize)>>;
}
