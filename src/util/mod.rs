//! Small cross-cutting helpers: theme persistence, roster date math, and
//! the cancellable polling handle.

pub mod dates;
pub mod phone;
pub mod poll;
pub mod roster_grid;
pub mod theme;

/// Spawn a UI-bound future on the browser event loop. Outside the browser
/// build the future is dropped unpolled, which keeps native compiles (and
/// the test suite) free of an executor requirement.
pub fn spawn_ui<F: std::future::Future<Output = ()> + 'static>(fut: F) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
