use super::*;
use crate::state::session::MemoryStorage;

fn doctor(token: &str) -> StaffUser {
    StaffUser {
        id: "s1".to_owned(),
        first_name: "Asha".to_owned(),
        last_name: "Verma".to_owned(),
        email: "asha@hopewell.test".to_owned(),
        role: Role::Doctor,
        token: token.to_owned(),
    }
}

// =============================================================
// Defaults and rehydration
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.role().is_none());
}

#[test]
fn rehydrates_from_persisted_session() {
    let session = StaffSession::new(MemoryStorage::new());
    session.store(&doctor("jwt-1"));

    let state = AuthState::from_session(&session);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Doctor));
}

#[test]
fn empty_storage_rehydrates_logged_out() {
    let session = StaffSession::new(MemoryStorage::new());
    let state = AuthState::from_session(&session);
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / logout keep memory and storage in step
// =============================================================

#[test]
fn login_sets_memory_and_storage_together() {
    let session = StaffSession::new(MemoryStorage::new());
    let mut state = AuthState::default();

    state.login(&session, doctor("jwt-1"));
    assert!(state.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("jwt-1"));
}

#[test]
fn logout_clears_memory_and_storage_together() {
    let session = StaffSession::new(MemoryStorage::new());
    let mut state = AuthState::default();
    state.login(&session, doctor("jwt-1"));

    state.logout(&session);
    assert!(!state.is_authenticated());
    assert!(session.token().is_none());

    // idempotent
    state.logout(&session);
    assert!(!state.is_authenticated());
}
