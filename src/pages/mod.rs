//! Page components, one module per routed page.
//!
//! Staff pages are flat; admin-, doctor-, and portal-specific pages live in
//! their own submodules, mirroring the route tree.

pub mod accountant;
pub mod accountant_bill;
pub mod admin;
pub mod doctor;
pub mod inventory;
pub mod lab;
pub mod login;
pub mod my_leave;
pub mod my_roster;
pub mod not_found;
pub mod nurse;
pub mod patient;
pub mod pharmacist;
pub mod receptionist;
pub mod roster;
pub mod unauthorized;
