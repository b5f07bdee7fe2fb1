//! Theme preference persistence.
//!
//! Reads the user's choice from the `theme` storage key and applies it as a
//! `data-theme` attribute on `<body>`. Toggle writes back write-through, so
//! the choice survives a reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::session::{StorageBackend, THEME_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read the stored preference; unknown or missing values mean light.
pub fn read_preference<B: StorageBackend>(backend: &B) -> Theme {
    backend
        .get_item(THEME_KEY)
        .and_then(|raw| Theme::from_str(&raw))
        .unwrap_or_default()
}

/// Persist a preference.
pub fn store_preference<B: StorageBackend>(backend: &B, theme: Theme) {
    backend.set_item(THEME_KEY, theme.as_str());
}

/// Set `data-theme` on `<body>`. Requires a browser environment.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle, apply, and persist in one step; returns the new theme.
pub fn toggle<B: StorageBackend>(backend: &B, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    store_preference(backend, next);
    next
}
