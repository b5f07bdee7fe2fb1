use super::*;
use crate::routing::routes::{ADMIN_ONLY, INVENTORY_ROLES, STAFF_ROUTES};

// =============================================================
// Core decision rules
// =============================================================

#[test]
fn no_session_is_unauthenticated_regardless_of_allow_list() {
    assert_eq!(evaluate(None, None), GuardOutcome::Unauthenticated);
    assert_eq!(evaluate(None, Some(ADMIN_ONLY)), GuardOutcome::Unauthenticated);
}

#[test]
fn unset_allow_list_admits_any_authenticated_staff() {
    for role in Role::ALL {
        assert_eq!(evaluate(Some(role), None), GuardOutcome::Allowed);
    }
}

#[test]
fn member_of_allow_list_is_admitted() {
    assert_eq!(evaluate(Some(Role::Admin), Some(ADMIN_ONLY)), GuardOutcome::Allowed);
    assert_eq!(
        evaluate(Some(Role::Pharmacist), Some(INVENTORY_ROLES)),
        GuardOutcome::Allowed
    );
}

#[test]
fn non_member_is_forbidden_not_rendered_through() {
    assert_eq!(evaluate(Some(Role::Nurse), Some(ADMIN_ONLY)), GuardOutcome::Forbidden);
    assert_eq!(
        evaluate(Some(Role::Doctor), Some(INVENTORY_ROLES)),
        GuardOutcome::Forbidden
    );
}

#[test]
fn empty_allow_list_admits_nobody() {
    for role in Role::ALL {
        assert_eq!(evaluate(Some(role), Some(&[])), GuardOutcome::Forbidden);
    }
}

// =============================================================
// Exhaustive sweep over the access table
// =============================================================

#[test]
fn every_route_admits_exactly_its_allowed_roles() {
    for route in STAFF_ROUTES {
        for role in Role::ALL {
            let outcome = evaluate(Some(role), route.allowed);
            let expected = match route.allowed {
                None => GuardOutcome::Allowed,
                Some(set) if set.contains(&role) => GuardOutcome::Allowed,
                Some(_) => GuardOutcome::Forbidden,
            };
            assert_eq!(outcome, expected, "route {} role {role:?}", route.path);
        }
        // and always a login redirect with no session
        assert_eq!(evaluate(None, route.allowed), GuardOutcome::Unauthenticated);
    }
}

#[test]
fn doctor_scenario_matches_expected_navigation() {
    // Doctor logs in, lands on /doctor, may browse the schedule, is turned
    // away from the admin dashboard.
    let role = Some(Role::Doctor);
    let doctor_home = STAFF_ROUTES.iter().find(|r| r.path == "/doctor").unwrap();
    let schedule = STAFF_ROUTES.iter().find(|r| r.path == "/doctor/schedule").unwrap();
    let admin = STAFF_ROUTES.iter().find(|r| r.path == "/admin").unwrap();

    assert_eq!(evaluate(role, doctor_home.allowed), GuardOutcome::Allowed);
    assert_eq!(evaluate(role, schedule.allowed), GuardOutcome::Allowed);
    assert_eq!(evaluate(role, admin.allowed), GuardOutcome::Forbidden);
}
