//! Stale-session cleanup.

use carelink_core::config::SessionConfig;
use chrono::{Duration, Utc};

use crate::manager::SessionManager;

/// Remove sessions that have been idle past the idle timeout or alive past
/// the absolute timeout. Returns the number removed.
pub fn cleanup_stale_sessions(manager: &SessionManager, config: &SessionConfig) -> usize {
    let now = Utc::now();
    let idle = Duration::seconds(config.idle_timeout_secs as i64);
    let absolute = Duration::seconds(config.absolute_timeout_secs as i64);

    // Count inside the closure: differencing two count() snapshots races
    // with concurrent create_session calls.
    let mut removed = 0usize;
    manager.retain(|_, ctx| {
        let keep = now - ctx.last_activity <= idle && now - ctx.created_at <= absolute;
        if !keep {
            removed += 1;
        }
        keep
    });
    if removed > 0 {
        tracing::debug!(removed, "cleaned up stale sessions");
    }
    removed
}
