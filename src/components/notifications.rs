//! Polling notification bells, one per audience.
//!
//! Each bell fetches on mount, then polls every 15 seconds; the interval
//! handle is dropped on cleanup so an unmounted bell stops ticking. Opening
//! the dropdown optimistically marks everything read and issues the
//! mark-read call; if that call fails the previous snapshot is restored.

use leptos::prelude::*;

use crate::net::types::Notification;
use crate::net::{ApiError, api, patient_api};
use crate::state::notifications::NotificationsState;
use crate::util::{poll, spawn_ui};

const POLL_INTERVAL_MS: u32 = 15_000;

/// Staff bell: polls the staff notification feed.
#[component]
pub fn StaffNotifications() -> impl IntoView {
    bell(
        || api::staff_notifications(),
        || api::mark_staff_notifications_read(),
    )
}

/// Patient bell: polls the portal notification feed.
#[component]
pub fn PatientNotifications() -> impl IntoView {
    bell(
        || patient_api::patient_notifications(),
        || patient_api::mark_patient_notifications_read(),
    )
}

fn bell<Fetch, FetchOut, Mark, MarkOut>(fetch: Fetch, mark_read: Mark) -> impl IntoView
where
    Fetch: Fn() -> FetchOut + Copy + 'static,
    FetchOut: Future<Output = Result<Vec<Notification>, ApiError>> + 'static,
    Mark: Fn() -> MarkOut + Copy + 'static,
    MarkOut: Future<Output = Result<(), ApiError>> + 'static,
{
    let state = RwSignal::new(NotificationsState::default());

    let refresh = move || {
        spawn_ui(async move {
            match fetch().await {
                Ok(items) => state.update(|s| s.replace(items)),
                // A failed poll keeps the previous list on screen.
                Err(err) => {
                    #[cfg(feature = "csr")]
                    log::warn!("notification poll failed: {err}");
                    #[cfg(not(feature = "csr"))]
                    let _ = err;
                }
            }
        });
    };

    refresh();
    let handle = StoredValue::new_local(Some(poll::start(POLL_INTERVAL_MS, refresh)));
    on_cleanup(move || {
        handle.update_value(|h| drop(h.take()));
    });

    let on_toggle = move |_| {
        let opening = !state.get().open;
        state.update(|s| s.open = opening);
        if opening && state.get().unread_count() > 0 {
            let snapshot = state.try_update(|s| s.mark_all_read()).unwrap_or_default();
            spawn_ui(async move {
                if mark_read().await.is_err() {
                    state.update(|s| s.rollback(snapshot));
                }
            });
        }
    };

    view! {
        <div class="notifications-container">
            <button class="notifications-bell" on:click=on_toggle>
                "🔔"
                <Show when={move || state.get().unread_count() > 0}>
                    <span class="unread-badge">{move || state.get().unread_count()}</span>
                </Show>
            </button>
            <Show when=move || state.get().open>
                <div class="notifications-dropdown">
                    {move || {
                        let items = state.get().items;
                        if items.is_empty() {
                            view! { <div class="notification-item">"No notifications yet."</div> }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|n| {
                                    let class = if n.is_read {
                                        "notification-item read"
                                    } else {
                                        "notification-item unread"
                                    };
                                    view! {
                                        <div class=class>
                                            <p>{n.message}</p>
                                            <small>{n.created_at.unwrap_or_default()}</small>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
