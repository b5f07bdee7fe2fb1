//! Doctor dashboard: this doctor's appointment queue with approve, reject
//! (with reason), and completion actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{Appointment, AppointmentStatus};
use crate::state::auth::AuthState;
use crate::util::spawn_ui;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pending,
    Confirmed,
    History,
}

fn tab_matches(tab: Tab, status: AppointmentStatus) -> bool {
    match tab {
        Tab::Pending => status == AppointmentStatus::Pending,
        Tab::Confirmed => status == AppointmentStatus::Approved,
        Tab::History => {
            matches!(status, AppointmentStatus::Completed | AppointmentStatus::Rejected)
        }
    }
}

#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let appointments = LocalResource::new(api::list_appointments);
    let tab = RwSignal::new(Tab::Pending);
    let error = RwSignal::new(String::new());

    let rejecting = RwSignal::new(None::<String>);
    let rejection_reason = RwSignal::new(String::new());

    let set_status = move |id: String, status: AppointmentStatus, reason: Option<String>| {
        error.set(String::new());
        spawn_ui(async move {
            match api::set_appointment_status(&id, status, reason.as_deref()).await {
                Ok(()) => appointments.refetch(),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let confirm_rejection = move |_| {
        let Some(id) = rejecting.get_untracked() else {
            return;
        };
        let reason = rejection_reason.get_untracked();
        rejecting.set(None);
        rejection_reason.set(String::new());
        set_status(id, AppointmentStatus::Rejected, Some(reason));
    };

    let card_navigate = navigate.clone();
    let card = move |app: Appointment| {
        let navigate = card_navigate.clone();
        let approve_id = app.id.clone();
        let reject_id = app.id.clone();
        let complete_id = app.id.clone();
        let ehr_path = app
            .patient
            .as_ref()
            .map(|p| format!("/doctor/patient/{}", p.id));
        let status = app.status;
        view! {
            <div class="appointment-card">
                <div class="patient-info-bar">
                    {app.patient
                        .as_ref()
                        .map_or_else(
                            || "Patient Not Found".to_owned(),
                            |p| format!("{} (UHID: {})", p.full_name(), p.uhid.clone().unwrap_or_default()),
                        )}
                </div>
                <div class="appointment-details">
                    <p>{format!("{} at {}", app.appointment_date, app.appointment_time)}</p>
                    <p>{format!("Reason: {}", app.reason.clone().unwrap_or_else(|| "N/A".to_owned()))}</p>
                    <span class="status-badge">{format!("{status:?}")}</span>
                    {app.rejection_reason
                        .as_ref()
                        .map(|r| view! { <p class="rejection-note">{format!("Rejected: {r}")}</p> })}
                </div>
                <div class="appointment-actions">
                    {(status == AppointmentStatus::Pending)
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| {
                                        set_status(
                                            approve_id.clone(),
                                            AppointmentStatus::Approved,
                                            None,
                                        );
                                    }
                                >
                                    "Approve"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| rejecting.set(Some(reject_id.clone()))
                                >
                                    "Reject"
                                </button>
                            }
                        })}
                    {(status == AppointmentStatus::Approved)
                        .then(|| {
                            view! {
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        set_status(
                                            complete_id.clone(),
                                            AppointmentStatus::Completed,
                                            None,
                                        );
                                    }
                                >
                                    "Mark as Completed"
                                </button>
                                {ehr_path
                                    .clone()
                                    .map(|path| {
                                        let navigate = navigate.clone();
                                        view! {
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    navigate(&path, NavigateOptions::default());
                                                }
                                            >
                                                "View Patient EHR"
                                            </button>
                                        }
                                    })}
                            }
                        })}
                </div>
            </div>
        }
    };

    view! {
        <div class="page doctor-dashboard">
            <div class="page-header">
                <h2>
                    {move || {
                        format!(
                            "Welcome Back, Dr. {}!",
                            auth.get().user.map(|u| u.last_name).unwrap_or_default(),
                        )
                    }}
                </h2>
                <button
                    class="btn btn--primary"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/doctor/schedule", NavigateOptions::default())
                    }
                >
                    "Manage Schedule"
                </button>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>

            <Show when=move || rejecting.get().is_some()>
                <div class="panel rejection-form">
                    <label>
                        "Please provide a reason for rejecting this appointment request."
                        <textarea
                            prop:value=move || rejection_reason.get()
                            on:input=move |ev| rejection_reason.set(event_target_value(&ev))
                            required
                        ></textarea>
                    </label>
                    <button class="btn btn--danger" on:click=confirm_rejection>
                        "Confirm Rejection"
                    </button>
                    <button class="btn" on:click=move |_| rejecting.set(None)>"Cancel"</button>
                </div>
            </Show>

            <div class="tab-bar">
                <button
                    class:active=move || tab.get() == Tab::Pending
                    on:click=move |_| tab.set(Tab::Pending)
                >
                    "Pending Approval"
                </button>
                <button
                    class:active=move || tab.get() == Tab::Confirmed
                    on:click=move |_| tab.set(Tab::Confirmed)
                >
                    "All Confirmed"
                </button>
                <button
                    class:active=move || tab.get() == Tab::History
                    on:click=move |_| tab.set(Tab::History)
                >
                    "History"
                </button>
            </div>

            <Suspense fallback=|| view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    appointments.get().map(|result| match result {
                        Ok(list) => {
                            // The shared endpoint returns every appointment;
                            // only this doctor's rows are shown.
                            let my_id = auth.get().user.map(|u| u.id).unwrap_or_default();
                            let mut mine: Vec<_> = list
                                .into_iter()
                                .filter(|a| {
                                    a.doctor.as_ref().is_some_and(|d| d.id == my_id)
                                })
                                .filter(|a| tab_matches(tab.get(), a.status))
                                .collect();
                            mine.sort_by(|a, b| {
                                (a.appointment_date.as_str(), a.appointment_time.as_str())
                                    .cmp(&(b.appointment_date.as_str(), b.appointment_time.as_str()))
                            });
                            if mine.is_empty() {
                                view! {
                                    <p class="empty-state">"No appointments in this category."</p>
                                }
                                    .into_any()
                            } else {
                                mine.into_iter().map(&card).collect_view().into_any()
                            }
                        }
                        Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
