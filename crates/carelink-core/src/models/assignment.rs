use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A doctor↔patient care-relationship edge. Admin-managed; existence is
/// binary, no status of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub doctor_id: String,
    pub patient_id: String,
    pub created_at: DateTime<Utc>,
}

/// Result of an assignment create. `Duplicate` is a normal outcome, not an
/// error: the (doctor, patient) pair already has an edge and nothing was
/// inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// A new edge was inserted; carries its id.
    Created(String),
    /// The edge already existed. Enforced by the storage-layer uniqueness
    /// constraint, so concurrent identical requests resolve to exactly one
    /// `Created` and the rest `Duplicate`.
    Duplicate,
}
