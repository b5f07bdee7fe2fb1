//! Patient portal pages, all nested under `/patient`.

pub mod appointments;
pub mod bills;
pub mod dashboard;
pub mod doctor_history;
pub mod layout;
pub mod login;
pub mod records;
