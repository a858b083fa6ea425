use carelink_core::models::Role;
use carelink_session::{
    authorize, Denial, GateDecision, PortalSection, RedirectTarget, SessionContext,
};

fn session(role: Role) -> SessionContext {
    SessionContext::new("user-1".to_string(), role)
}

// ── Exhaustive role × section table ──────────────────────────────────────

#[test]
fn role_matches_section_iff_allowed() {
    let roles = [Role::Admin, Role::Doctor, Role::Patient];
    let sections = [
        PortalSection::Admin,
        PortalSection::Doctor,
        PortalSection::Patient,
    ];

    for role in roles {
        let ctx = session(role);
        for section in sections {
            let decision = authorize(Some(&ctx), Some(section));
            if section.required_role() == role {
                assert_eq!(
                    decision,
                    GateDecision::Allow,
                    "{role} must enter the {role} section"
                );
            } else {
                assert_eq!(
                    decision,
                    GateDecision::Deny(Denial::Forbidden { role }),
                    "{role} must not enter the {:?} section",
                    section
                );
            }
        }
    }
}

#[test]
fn unprotected_request_always_allowed() {
    assert_eq!(authorize(None, None), GateDecision::Allow);
    for role in [Role::Admin, Role::Doctor, Role::Patient] {
        assert_eq!(authorize(Some(&session(role)), None), GateDecision::Allow);
    }
}

#[test]
fn missing_session_is_unauthenticated_for_every_section() {
    for section in [
        PortalSection::Admin,
        PortalSection::Doctor,
        PortalSection::Patient,
    ] {
        assert_eq!(
            authorize(None, Some(section)),
            GateDecision::Deny(Denial::Unauthenticated)
        );
    }
}

// ── Redirect semantics ────────────────────────────────────────────────────

#[test]
fn wrong_role_redirects_to_own_dashboard_not_login() {
    let ctx = session(Role::Patient);
    let GateDecision::Deny(denial) = authorize(Some(&ctx), Some(PortalSection::Admin)) else {
        panic!("patient must be denied the admin section");
    };
    assert_eq!(
        denial.redirect(),
        RedirectTarget::Dashboard(Role::Patient),
        "forbidden requests go back to the caller's own home"
    );
    assert_eq!(denial.redirect().path(), "/patient/dashboard");
}

#[test]
fn unauthenticated_redirects_to_login() {
    let GateDecision::Deny(denial) = authorize(None, Some(PortalSection::Admin)) else {
        panic!("missing session must be denied");
    };
    assert_eq!(denial.redirect(), RedirectTarget::Login);
    assert_eq!(denial.redirect().path(), "/login");
}

#[test]
fn denial_kinds_are_distinguishable() {
    let unauth = authorize(None, Some(PortalSection::Doctor));
    let forbidden = authorize(Some(&session(Role::Patient)), Some(PortalSection::Doctor));
    assert_ne!(unauth, forbidden, "the two denial kinds must not collapse");
}
