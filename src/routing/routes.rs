//! Static route access table for the staff application.
//!
//! One row per guarded path. `allowed: None` means "any authenticated staff
//! member"; a set restricts further. The router and the navbar both read
//! this table, so a path can't be reachable with one rule and linked with
//! another.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const INVENTORY_ROLES: &[Role] = &[Role::Admin, Role::Pharmacist];
pub const RECEPTIONIST_ONLY: &[Role] = &[Role::Receptionist];
pub const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
pub const NURSE_ONLY: &[Role] = &[Role::Nurse];
pub const PHARMACIST_ONLY: &[Role] = &[Role::Pharmacist];
pub const LAB_ONLY: &[Role] = &[Role::LabTechnician];
pub const ACCOUNTANT_ONLY: &[Role] = &[Role::Accountant];

#[derive(Clone, Copy, Debug)]
pub struct RouteAccess {
    /// Path pattern as registered with the router (`:name` for params).
    pub path: &'static str,
    /// `None` admits any authenticated staff user.
    pub allowed: Option<&'static [Role]>,
}

pub const STAFF_ROUTES: &[RouteAccess] = &[
    RouteAccess { path: "/admin", allowed: Some(ADMIN_ONLY) },
    RouteAccess { path: "/roster", allowed: Some(ADMIN_ONLY) },
    RouteAccess { path: "/analytics", allowed: Some(ADMIN_ONLY) },
    RouteAccess { path: "/staff-patients", allowed: Some(ADMIN_ONLY) },
    RouteAccess { path: "/staff-directory", allowed: Some(ADMIN_ONLY) },
    RouteAccess { path: "/leave-management", allowed: Some(ADMIN_ONLY) },
    RouteAccess { path: "/inventory", allowed: Some(INVENTORY_ROLES) },
    RouteAccess { path: "/receptionist", allowed: Some(RECEPTIONIST_ONLY) },
    RouteAccess { path: "/nurse", allowed: Some(NURSE_ONLY) },
    RouteAccess { path: "/doctor", allowed: Some(DOCTOR_ONLY) },
    RouteAccess { path: "/doctor/patient/:patientId", allowed: Some(DOCTOR_ONLY) },
    RouteAccess { path: "/doctor/schedule", allowed: Some(DOCTOR_ONLY) },
    RouteAccess { path: "/pharmacist", allowed: Some(PHARMACIST_ONLY) },
    RouteAccess { path: "/lab", allowed: Some(LAB_ONLY) },
    RouteAccess { path: "/accountant", allowed: Some(ACCOUNTANT_ONLY) },
    RouteAccess { path: "/accountant/bill/:patientId", allowed: Some(ACCOUNTANT_ONLY) },
    RouteAccess { path: "/my-roster", allowed: None },
    RouteAccess { path: "/my-leave", allowed: None },
];

/// Allowed-role set for a registered staff path pattern.
pub fn allowed_roles(path: &str) -> Option<Option<&'static [Role]>> {
    STAFF_ROUTES
        .iter()
        .find(|r| r.path == path)
        .map(|r| r.allowed)
}

/// Audience split: everything under `/patient` belongs to the portal.
pub fn is_patient_path(path: &str) -> bool {
    path == "/patient" || path.starts_with("/patient/")
}

/// Where a staff member lands right after logging in.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Receptionist => "/receptionist",
        Role::Doctor => "/doctor",
        Role::Nurse => "/nurse",
        Role::Pharmacist => "/pharmacist",
        Role::LabTechnician => "/lab",
        Role::Accountant => "/accountant",
    }
}

/// Navbar entries for a role: the dashboards this role may open, plus the
/// routes open to all staff.
pub fn nav_paths(role: Role) -> Vec<&'static str> {
    STAFF_ROUTES
        .iter()
        .filter(|r| !r.path.contains(':'))
        .filter(|r| r.allowed.is_none_or(|set| set.contains(&role)))
        .map(|r| r.path)
        .collect()
}
