//! Patient portal navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notifications::PatientNotifications;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::patient_auth::PatientAuthState;
use crate::state::session::PatientSession;

#[component]
pub fn PatientNavbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<PatientAuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.update(|state| state.logout(&PatientSession::browser()));
        navigate("/patient/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar navbar--patient">
            <span class="navbar__brand">"Hopewell Patient Portal"</span>
            <Show when=move || auth.get().is_authenticated()>
                <div class="navbar__links">
                    <A href="/patient">"Dashboard"</A>
                    <A href="/patient/appointments">"Appointments"</A>
                    <A href="/patient/records">"My Records"</A>
                    <A href="/patient/bills">"My Bills"</A>
                </div>
                <div class="navbar__actions">
                    <span class="navbar__user">
                        {move || {
                            auth.get().patient.map(|p| p.full_name()).unwrap_or_default()
                        }}
                    </span>
                    <PatientNotifications/>
                    <ThemeToggle/>
                    <button class="btn" on:click=on_logout.clone()>"Logout"</button>
                </div>
            </Show>
        </nav>
    }
}
