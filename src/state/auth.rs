//! Staff authentication state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, StaffUser};
use crate::state::session::{StaffSession, StorageBackend};

/// Current staff user, provided as an `RwSignal` context by the staff
/// application shell. The session store is the persistence half; this is
/// the in-memory half, and login/logout keep the two in step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<StaffUser>,
}

impl AuthState {
    /// Rehydrate from the persisted session (app start).
    pub fn from_session<B: StorageBackend>(session: &StaffSession<B>) -> Self {
        Self {
            user: session.load(),
        }
    }

    /// Token presence is authoritative; the profile is only a display cache.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Accept a login payload: set in-memory state and write through to
    /// storage in the same step.
    pub fn login<B: StorageBackend>(&mut self, session: &StaffSession<B>, user: StaffUser) {
        session.store(&user);
        self.user = Some(user);
    }

    /// Clear both halves. Safe to call when already logged out.
    pub fn logout<B: StorageBackend>(&mut self, session: &StaffSession<B>) {
        session.clear();
        self.user = None;
    }
}
