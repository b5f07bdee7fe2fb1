//! Route guards.
//!
//! The decision is a pure function over the current role and a route's
//! allowed set; the components below apply it on every render of a guarded
//! route, redirecting with history replacement so the back button does not
//! bounce through the blocked page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::patient_auth::PatientAuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// No session: go to the login page.
    Unauthenticated,
    /// Authenticated but the role is outside the route's allowed set:
    /// go to the unauthorized page. (The allow-list is enforced here; a
    /// disallowed role is never rendered through.)
    Forbidden,
    Allowed,
}

/// Evaluate a guarded navigation attempt.
///
/// `allowed = None` admits any authenticated staff user.
pub fn evaluate(role: Option<Role>, allowed: Option<&[Role]>) -> GuardOutcome {
    let Some(role) = role else {
        return GuardOutcome::Unauthenticated;
    };
    match allowed {
        None => GuardOutcome::Allowed,
        Some(set) if set.contains(&role) => GuardOutcome::Allowed,
        Some(_) => GuardOutcome::Forbidden,
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Staff route guard. Wrap a page and pass the route's allowed set from the
/// access table; omit `allowed` for any-authenticated-staff routes.
#[component]
pub fn RequireRole(
    #[prop(optional)] allowed: Option<&'static [Role]>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let children = StoredValue::new(children);

    move || match evaluate(auth.get().role(), allowed) {
        GuardOutcome::Unauthenticated => {
            view! { <Redirect path="/login" options=replace()/> }.into_any()
        }
        GuardOutcome::Forbidden => {
            view! { <Redirect path="/unauthorized" options=replace()/> }.into_any()
        }
        GuardOutcome::Allowed => children.with_value(|c| c()).into_any(),
    }
}

/// Patient portal guard: binary, authenticated or back to the portal login.
#[component]
pub fn RequirePatient(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<PatientAuthState>>();
    let children = StoredValue::new(children);

    move || {
        if auth.get().is_authenticated() {
            children.with_value(|c| c()).into_any()
        } else {
            view! { <Redirect path="/patient/login" options=replace()/> }.into_any()
        }
    }
}
