use super::*;

// =============================================================
// Access table shape
// =============================================================

#[test]
fn table_covers_the_canonical_bindings() {
    assert_eq!(allowed_roles("/admin"), Some(Some(ADMIN_ONLY)));
    assert_eq!(allowed_roles("/roster"), Some(Some(ADMIN_ONLY)));
    assert_eq!(allowed_roles("/inventory"), Some(Some(INVENTORY_ROLES)));
    assert_eq!(allowed_roles("/receptionist"), Some(Some(RECEPTIONIST_ONLY)));
    assert_eq!(allowed_roles("/nurse"), Some(Some(NURSE_ONLY)));
    assert_eq!(allowed_roles("/doctor/schedule"), Some(Some(DOCTOR_ONLY)));
    assert_eq!(allowed_roles("/pharmacist"), Some(Some(PHARMACIST_ONLY)));
    assert_eq!(allowed_roles("/lab"), Some(Some(LAB_ONLY)));
    assert_eq!(allowed_roles("/accountant"), Some(Some(ACCOUNTANT_ONLY)));
    assert_eq!(allowed_roles("/my-roster"), Some(None));
    assert_eq!(allowed_roles("/my-leave"), Some(None));
    assert_eq!(allowed_roles("/nowhere"), None);
}

#[test]
fn table_has_no_duplicate_paths() {
    for (i, a) in STAFF_ROUTES.iter().enumerate() {
        for b in &STAFF_ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn no_staff_route_lives_under_the_patient_prefix() {
    for route in STAFF_ROUTES {
        assert!(!is_patient_path(route.path), "{}", route.path);
    }
}

// =============================================================
// Audience classifier
// =============================================================

#[test]
fn patient_prefix_selects_the_portal() {
    assert!(is_patient_path("/patient"));
    assert!(is_patient_path("/patient/login"));
    assert!(is_patient_path("/patient/bills"));
    assert!(!is_patient_path("/patients"));
    assert!(!is_patient_path("/admin"));
    assert!(!is_patient_path("/"));
}

// =============================================================
// Role landing map
// =============================================================

#[test]
fn every_role_lands_on_a_route_it_may_access() {
    for role in Role::ALL {
        let path = landing_path(role);
        let allowed = allowed_roles(path).expect("landing path must be in the table");
        assert!(
            allowed.is_none_or(|set| set.contains(&role)),
            "{role:?} lands on {path} but is not allowed there"
        );
    }
}

#[test]
fn nav_paths_exclude_parameterized_routes_and_foreign_dashboards() {
    let nurse_nav = nav_paths(Role::Nurse);
    assert!(nurse_nav.contains(&"/nurse"));
    assert!(nurse_nav.contains(&"/my-leave"));
    assert!(!nurse_nav.contains(&"/admin"));
    assert!(!nurse_nav.iter().any(|p| p.contains(':')));

    let pharmacist_nav = nav_paths(Role::Pharmacist);
    assert!(pharmacist_nav.contains(&"/inventory"));
    assert!(pharmacist_nav.contains(&"/pharmacist"));
    assert!(!pharmacist_nav.contains(&"/lab"));
}
