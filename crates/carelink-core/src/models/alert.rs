use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read state of an alert. The only legal transition is `Sent` → `Seen`,
/// performed once by the recipient patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Sent,
    Seen,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Sent => "sent",
            AlertStatus::Seen => "seen",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sent" => Some(AlertStatus::Sent),
            "seen" => Some(AlertStatus::Seen),
            _ => None,
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A one-way message from a doctor to a patient. Never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Sending doctor's user id.
    pub doctor_id: String,
    /// Recipient patient's user id.
    pub patient_id: String,
    pub message: String,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
}
