//! Staff login page. On success the user lands on their role's dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::routing::landing_path;
use crate::state::auth::AuthState;
use crate::state::session::StaffSession;
use crate::util::spawn_ui;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        let navigate = navigate.clone();
        spawn_ui(async move {
            match api::login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(user) => {
                    let role = user.role;
                    auth.update(|state| state.login(&StaffSession::browser(), user));
                    navigate(landing_path(role), NavigateOptions::default());
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="login-page">
            <h2>"Staff Portal"</h2>
            <p class="subtitle">"Please sign in to continue"</p>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>
            <form on:submit=submit>
                <label>
                    "Email Address"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        required
                    />
                </label>
                <button type="submit" class="btn btn--primary">"Login"</button>
            </form>
            <p class="patient-login-link">
                "Are you a patient? " <A href="/patient/login">"Login Here"</A>
            </p>
        </div>
    }
}
