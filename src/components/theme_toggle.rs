//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::session::BrowserStorage;
use crate::util::theme::{self, Theme};

/// Toggle button bound to the theme context provided by the app root.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();

    let on_toggle = move |_| {
        current.set(theme::toggle(&BrowserStorage, current.get()));
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle title="Toggle theme">
            {move || match current.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}
