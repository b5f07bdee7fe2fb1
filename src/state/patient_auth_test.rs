use super::*;
use crate::state::session::{MemoryStorage, PATIENT_USER_KEY, StorageBackend};

fn login_payload(token: &str) -> PatientLoginResponse {
    PatientLoginResponse {
        token: token.to_owned(),
        patient: PatientUser {
            id: "p1".to_owned(),
            uhid: "UH-1001".to_owned(),
            first_name: "Ravi".to_owned(),
            last_name: "Kumar".to_owned(),
            phone: Some("+911234567890".to_owned()),
        },
    }
}

#[test]
fn default_state_is_unauthenticated() {
    assert!(!PatientAuthState::default().is_authenticated());
}

#[test]
fn login_stores_token_and_profile() {
    let session = PatientSession::new(MemoryStorage::new());
    let mut state = PatientAuthState::default();

    state.login(&session, login_payload("jwt-pat"));
    assert!(state.is_authenticated());
    assert_eq!(state.patient.as_ref().unwrap().uhid, "UH-1001");
    assert_eq!(session.token().as_deref(), Some("jwt-pat"));
}

#[test]
fn logout_clears_both_keys_and_memory() {
    let session = PatientSession::new(MemoryStorage::new());
    let mut state = PatientAuthState::default();
    state.login(&session, login_payload("jwt-pat"));

    state.logout(&session);
    assert!(!state.is_authenticated());
    assert!(state.patient.is_none());
    assert!(session.token().is_none());
    assert!(session.load_user().is_none());
}

#[test]
fn profile_without_token_is_ignored_on_rehydrate() {
    // A stale cached profile must not resurrect a session: the token is
    // authoritative.
    let backend = MemoryStorage::new();
    backend.set_item(PATIENT_USER_KEY, "{\"_id\":\"p1\",\"uhid\":\"UH-1\",\"firstName\":\"R\",\"lastName\":\"K\"}");
    let session = PatientSession::new(backend);

    let state = PatientAuthState::from_session(&session);
    assert!(!state.is_authenticated());
    assert!(state.patient.is_none());
}

#[test]
fn rehydrates_full_session() {
    let session = PatientSession::new(MemoryStorage::new());
    let mut state = PatientAuthState::default();
    state.login(&session, login_payload("jwt-pat"));

    let reloaded = PatientAuthState::from_session(&session);
    assert_eq!(reloaded, state);
}
