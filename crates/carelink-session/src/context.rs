//! SessionContext — the authenticated identity a request carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use carelink_core::models::Role;

/// Per-session state. Created at login, passed explicitly into the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Opaque session identifier (UUID v4).
    pub session_id: String,
    /// The authenticated user's id.
    pub user_id: String,
    /// The authenticated user's role, fixed for the session's lifetime.
    pub role: Role,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp, advanced by `touch`.
    pub last_activity: DateTime<Utc>,
}

impl SessionContext {
    /// Create a new session context for an authenticated user.
    pub fn new(user_id: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            user_id,
            role,
            created_at: now,
            last_activity: now,
        }
    }

    /// Record activity on this session.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}
