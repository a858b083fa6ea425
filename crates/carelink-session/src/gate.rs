//! The portal gate: allow or deny a request against a protected section.

use serde::{Deserialize, Serialize};

use carelink_core::models::Role;

use crate::context::SessionContext;

/// A protected portal section. Each maps to exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalSection {
    Admin,
    Doctor,
    Patient,
}

impl PortalSection {
    /// The role allowed into this section.
    pub fn required_role(self) -> Role {
        match self {
            PortalSection::Admin => Role::Admin,
            PortalSection::Doctor => Role::Doctor,
            PortalSection::Patient => Role::Patient,
        }
    }
}

/// Where to send a denied client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The login entry point, for unauthenticated requests.
    Login,
    /// The denied user's own home section. A wrong-role request goes back
    /// to its own dashboard, never to the login page.
    Dashboard(Role),
}

impl RedirectTarget {
    /// Fixed per-role home location, as a portal-relative path.
    pub fn path(self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Dashboard(Role::Admin) => "/admin/dashboard",
            RedirectTarget::Dashboard(Role::Doctor) => "/doctor/dashboard",
            RedirectTarget::Dashboard(Role::Patient) => "/patient/dashboard",
        }
    }
}

/// Why a request was denied. The two kinds redirect differently, so the
/// caller must be able to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No session (or an expired one). Redirect to login.
    Unauthenticated,
    /// A valid session with the wrong role. Redirect to that role's own
    /// dashboard.
    Forbidden { role: Role },
}

impl Denial {
    pub fn redirect(self) -> RedirectTarget {
        match self {
            Denial::Unauthenticated => RedirectTarget::Login,
            Denial::Forbidden { role } => RedirectTarget::Dashboard(role),
        }
    }
}

/// Gate decision for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Deny(Denial),
}

impl GateDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// Decide whether a session may enter a section.
///
/// Pure function of its arguments: no section requirement always allows,
/// a missing session is `Unauthenticated` regardless of section, and an
/// authenticated session is allowed iff its role matches the section's.
pub fn authorize(
    session: Option<&SessionContext>,
    required: Option<PortalSection>,
) -> GateDecision {
    let Some(section) = required else {
        return GateDecision::Allow;
    };
    match session {
        None => GateDecision::Deny(Denial::Unauthenticated),
        Some(ctx) if ctx.role == section.required_role() => GateDecision::Allow,
        Some(ctx) => GateDecision::Deny(Denial::Forbidden { role: ctx.role }),
    }
}
