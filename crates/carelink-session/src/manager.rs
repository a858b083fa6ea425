//! SessionManager — concurrent session table via DashMap.

use dashmap::DashMap;
use std::sync::Arc;

use carelink_core::models::Role;

use crate::context::SessionContext;

/// Thread-safe session table. Reads hand out cloned snapshots so callers
/// never hold a map guard across their own work.
pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionContext>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Open a session for an authenticated user and return its id.
    pub fn create_session(&self, user_id: &str, role: Role) -> String {
        let ctx = SessionContext::new(user_id.to_string(), role);
        let session_id = ctx.session_id.clone();
        self.sessions.insert(session_id.clone(), ctx);
        session_id
    }

    /// Get a session context by id (cloned snapshot).
    pub fn get_session(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Record activity on a session. Returns false if it does not exist.
    pub fn touch(&self, session_id: &str) -> bool {
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            entry.touch();
            true
        } else {
            false
        }
    }

    /// Remove a session (logout). Returns the removed context, if any.
    pub fn remove_session(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub(crate) fn retain<F>(&self, f: F)
    where
        F: FnMut(&String, &mut SessionContext) -> bool,
    {
        self.sessions.retain(f);
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
