//! Staff navigation bar.
//!
//! Links are derived from the route access table, so the navbar can only
//! offer pages the current role is allowed to open.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notifications::StaffNotifications;
use crate::components::theme_toggle::ThemeToggle;
use crate::routing::routes::nav_paths;
use crate::state::auth::AuthState;
use crate::state::session::StaffSession;

fn label(path: &'static str) -> &'static str {
    match path {
        "/admin" => "Admin",
        "/roster" => "Roster",
        "/analytics" => "Analytics",
        "/staff-patients" => "Patients",
        "/staff-directory" => "Staff",
        "/leave-management" => "Leave Requests",
        "/inventory" => "Inventory",
        "/receptionist" => "Reception",
        "/nurse" => "Nursing",
        "/doctor" => "My Appointments",
        "/doctor/schedule" => "My Schedule",
        "/pharmacist" => "Pharmacy",
        "/lab" => "Laboratory",
        "/accountant" => "Billing",
        "/my-roster" => "My Roster",
        "/my-leave" => "My Leave",
        _ => path,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.update(|state| state.logout(&StaffSession::browser()));
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Hopewell HMS"</span>
            <Show when=move || auth.get().is_authenticated()>
                <div class="navbar__links">
                    {move || {
                        auth.get()
                            .role()
                            .map(|role| {
                                nav_paths(role)
                                    .into_iter()
                                    .map(|path| view! { <A href=path>{label(path)}</A> })
                                    .collect_view()
                            })
                    }}
                </div>
                <div class="navbar__actions">
                    <span class="navbar__user">
                        {move || auth.get().user.map(|u| u.full_name()).unwrap_or_default()}
                    </span>
                    <StaffNotifications/>
                    <ThemeToggle/>
                    <button class="btn" on:click=on_logout.clone()>"Logout"</button>
                </div>
            </Show>
        </nav>
    }
}
