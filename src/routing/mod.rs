//! Role-based routing: the pure guard decision, the static access table,
//! and the Leptos guard components that enforce them.

pub mod guard;
pub mod routes;

pub use guard::{GuardOutcome, evaluate};
pub use routes::{is_patient_path, landing_path};
