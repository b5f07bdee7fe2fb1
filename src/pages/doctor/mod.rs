//! Doctor-only pages.

pub mod dashboard;
pub mod patient_detail;
pub mod schedule;
