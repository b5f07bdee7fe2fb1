//! # hopewell-ui
//!
//! Leptos + WASM front-end for the Hopewell Hospital Management System.
//! Role-specific staff dashboards and a separate patient portal, consuming
//! the HMS REST backend over HTTP.
//!
//! Browser-only code (storage, HTTP, timers, downloads) is gated behind the
//! `csr` feature; with default features the crate builds natively so the
//! pure core (guards, sessions, date math, export builders) runs under
//! `cargo test`.

pub mod app;
pub mod components;
pub mod export;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: mounts [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
