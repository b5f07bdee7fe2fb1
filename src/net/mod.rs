//! REST bindings for the HMS backend.
//!
//! Two isolated pipelines share the low-level plumbing in [`http`] but
//! never share a token: [`api`] reads the staff session key, [`patient_api`]
//! reads the patient token key. A staff action can therefore never leak a
//! patient credential (or vice versa).

pub mod api;
pub mod http;
pub mod patient_api;
pub mod types;

pub use http::ApiError;
