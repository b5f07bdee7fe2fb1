//! Patient-portal authentication state, parallel to and independent of the
//! staff [`crate::state::auth::AuthState`].

#[cfg(test)]
#[path = "patient_auth_test.rs"]
mod patient_auth_test;

use crate::net::types::{PatientLoginResponse, PatientUser};
use crate::state::session::{PatientSession, StorageBackend};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientAuthState {
    pub token: Option<String>,
    pub patient: Option<PatientUser>,
}

impl PatientAuthState {
    pub fn from_session<B: StorageBackend>(session: &PatientSession<B>) -> Self {
        let token = session.token();
        // The profile cache is only honored while a token exists.
        let patient = token.as_ref().and_then(|_| session.load_user());
        Self { token, patient }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn login<B: StorageBackend>(
        &mut self,
        session: &PatientSession<B>,
        payload: PatientLoginResponse,
    ) {
        session.store(&payload.token, &payload.patient);
        self.token = Some(payload.token);
        self.patient = Some(payload.patient);
    }

    pub fn logout<B: StorageBackend>(&mut self, session: &PatientSession<B>) {
        session.clear();
        self.token = None;
        self.patient = None;
    }
}
