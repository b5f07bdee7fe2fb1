//! Persisted session stores, one per audience.
//!
//! Storage access goes through the [`StorageBackend`] trait so the stores
//! can be exercised natively with [`MemoryStorage`]; the browser build uses
//! `localStorage` via [`BrowserStorage`]. The staff and patient stores own
//! disjoint key sets and never touch each other's entries.
//!
//! Key layout (kept compatible with what the backend's web client expects):
//! - staff: one JSON blob under `user` (token + cached profile together)
//! - patient: `patientToken` and `patientUser`
//! - UI preference: `theme`

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::types::{PatientUser, StaffUser};

pub const STAFF_SESSION_KEY: &str = "user";
pub const PATIENT_TOKEN_KEY: &str = "patientToken";
pub const PATIENT_USER_KEY: &str = "patientUser";
pub const THEME_KEY: &str = "theme";

/// Minimal key-value persistence seam.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value);
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

/// `localStorage`-backed storage. Outside the browser every read misses and
/// every write is dropped, which leaves sessions unauthenticated.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for native use and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Staff session store: owns the `user` blob.
#[derive(Debug)]
pub struct StaffSession<B: StorageBackend> {
    backend: B,
}

impl StaffSession<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<B: StorageBackend> StaffSession<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the persisted session, if any. A malformed blob reads as no
    /// session at all.
    pub fn load(&self) -> Option<StaffUser> {
        let raw = self.backend.get_item(STAFF_SESSION_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist a fresh login payload (token + profile as one blob).
    pub fn store(&self, user: &StaffUser) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.backend.set_item(STAFF_SESSION_KEY, &raw);
        }
    }

    /// Remove the persisted session. Idempotent.
    pub fn clear(&self) {
        self.backend.remove_item(STAFF_SESSION_KEY);
    }

    /// Current bearer token, read fresh from storage.
    pub fn token(&self) -> Option<String> {
        self.load().map(|u| u.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Patient session store: owns `patientToken` + `patientUser`.
#[derive(Debug)]
pub struct PatientSession<B: StorageBackend> {
    backend: B,
}

impl PatientSession<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<B: StorageBackend> PatientSession<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get_item(PATIENT_TOKEN_KEY)
    }

    /// Cached patient profile; only meaningful while a token is present.
    pub fn load_user(&self) -> Option<PatientUser> {
        let raw = self.backend.get_item(PATIENT_USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn store(&self, token: &str, user: &PatientUser) {
        self.backend.set_item(PATIENT_TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            self.backend.set_item(PATIENT_USER_KEY, &raw);
        }
    }

    /// Remove both persisted keys. Idempotent.
    pub fn clear(&self) {
        self.backend.remove_item(PATIENT_TOKEN_KEY);
        self.backend.remove_item(PATIENT_USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
