//! Shown when an authenticated staff member hits a route outside their
//! role's allow-list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::landing_path;
use crate::state::auth::AuthState;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="message-page">
            <h2>"Not Authorized"</h2>
            <p>"Your role does not have access to that page."</p>
            {move || {
                auth.get()
                    .role()
                    .map(|role| view! { <A href=landing_path(role)>"Back to your dashboard"</A> })
            }}
        </div>
    }
}
