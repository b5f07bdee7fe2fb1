//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by audience and domain (`auth` staff, `patient_auth`
//! portal, `notifications`, `session` persistence) so components depend on
//! small focused models. The structs are plain data; pages provide them as
//! `RwSignal` contexts.

pub mod auth;
pub mod notifications;
pub mod patient_auth;
pub mod session;
