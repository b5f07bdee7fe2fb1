//! Shared chrome components: navbars, notification bells, theme toggle.

pub mod navbar;
pub mod notifications;
pub mod patient_navbar;
pub mod theme_toggle;
