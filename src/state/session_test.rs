use super::*;
use crate::net::types::Role;

fn staff_user(token: &str) -> StaffUser {
    StaffUser {
        id: "s1".to_owned(),
        first_name: "Asha".to_owned(),
        last_name: "Verma".to_owned(),
        email: "asha@hopewell.test".to_owned(),
        role: Role::Doctor,
        token: token.to_owned(),
    }
}

fn patient_user() -> PatientUser {
    PatientUser {
        id: "p1".to_owned(),
        uhid: "UH-1001".to_owned(),
        first_name: "Ravi".to_owned(),
        last_name: "Kumar".to_owned(),
        phone: Some("+911234567890".to_owned()),
    }
}

// =============================================================
// Staff session lifecycle
// =============================================================

#[test]
fn staff_login_persists_token_and_profile() {
    let session = StaffSession::new(MemoryStorage::new());
    assert!(!session.is_authenticated());

    session.store(&staff_user("jwt-1"));
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("jwt-1"));
    assert_eq!(session.load().unwrap().first_name, "Asha");
}

#[test]
fn staff_logout_removes_key_and_is_idempotent() {
    let session = StaffSession::new(MemoryStorage::new());
    session.store(&staff_user("jwt-1"));
    session.clear();
    assert!(!session.is_authenticated());
    assert!(session.load().is_none());
    // clearing again is a no-op
    session.clear();
    assert!(session.load().is_none());
}

#[test]
fn malformed_staff_blob_reads_as_logged_out() {
    let backend = MemoryStorage::new();
    backend.set_item(STAFF_SESSION_KEY, "{not json");
    let session = StaffSession::new(backend);
    assert!(session.load().is_none());
    assert!(!session.is_authenticated());
}

// =============================================================
// Patient session lifecycle
// =============================================================

#[test]
fn patient_login_writes_both_keys() {
    let session = PatientSession::new(MemoryStorage::new());
    session.store("jwt-pat", &patient_user());
    assert_eq!(session.token().as_deref(), Some("jwt-pat"));
    assert_eq!(session.load_user().unwrap().uhid, "UH-1001");
}

#[test]
fn patient_logout_removes_both_keys() {
    let session = PatientSession::new(MemoryStorage::new());
    session.store("jwt-pat", &patient_user());
    session.clear();
    assert!(session.token().is_none());
    assert!(session.load_user().is_none());
}

// =============================================================
// Audience isolation
// =============================================================

#[test]
fn staff_and_patient_stores_use_disjoint_keys() {
    // Both audiences share one physical storage in the browser; model that
    // with a single backend handed to both stores.
    let backend = MemoryStorage::new();
    StaffSession::new(&backend).store(&staff_user("jwt-staff"));
    PatientSession::new(&backend).store("jwt-pat", &patient_user());

    // Logging out of the patient portal leaves the staff session intact.
    PatientSession::new(&backend).clear();
    assert_eq!(
        StaffSession::new(&backend).token().as_deref(),
        Some("jwt-staff")
    );

    // And vice versa.
    PatientSession::new(&backend).store("jwt-pat-2", &patient_user());
    StaffSession::new(&backend).clear();
    assert_eq!(
        PatientSession::new(&backend).token().as_deref(),
        Some("jwt-pat-2")
    );
}
