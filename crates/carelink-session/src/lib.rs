//! # carelink-session
//!
//! In-process session table and the portal gate. The gate is a pure
//! function of an explicit session argument and the requested section;
//! nothing here reads ambient state, so it tests without any simulated
//! request context.

mod context;
mod gate;
mod lifecycle;
mod manager;

pub use context::SessionContext;
pub use gate::{authorize, Denial, GateDecision, PortalSection, RedirectTarget};
pub use lifecycle::cleanup_stale_sessions;
pub use manager::SessionManager;
