//! Admin-only pages.

pub mod analytics;
pub mod dashboard;
pub mod leave_management;
pub mod patient_directory;
pub mod staff_directory;
