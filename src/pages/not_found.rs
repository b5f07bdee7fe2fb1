//! Catch-all page for unmatched staff paths.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="message-page">
            <h2>"404 — Page Not Found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <A href="/login">"Back to login"</A>
        </div>
    }
}
