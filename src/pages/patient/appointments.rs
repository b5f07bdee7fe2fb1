//! Full appointment history for the logged-in patient, split into upcoming,
//! pending, and past.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::patient_api;
use crate::net::types::{Appointment, AppointmentStatus};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Upcoming,
    Pending,
    Past,
}

fn tab_matches(tab: Tab, status: AppointmentStatus) -> bool {
    match tab {
        Tab::Upcoming => status == AppointmentStatus::Approved,
        Tab::Pending => status == AppointmentStatus::Pending,
        Tab::Past => {
            matches!(status, AppointmentStatus::Completed | AppointmentStatus::Rejected)
        }
    }
}

#[component]
pub fn MyAppointmentsPage() -> impl IntoView {
    let appointments = LocalResource::new(patient_api::my_appointments);
    let tab = RwSignal::new(Tab::Upcoming);

    let row = |a: &Appointment| {
        let doctor = a.doctor.as_ref();
        let history_link = doctor.map(|d| format!("/patient/history/doctor/{}", d.id));
        view! {
            <tr>
                <td>{format!("{} {}", a.appointment_date, a.appointment_time)}</td>
                <td>
                    {doctor
                        .map_or_else(
                            || "Record deleted".to_owned(),
                            |d| format!("Dr. {}", d.full_name()),
                        )}
                </td>
                <td>{a.reason.clone().unwrap_or_else(|| "N/A".to_owned())}</td>
                <td>
                    {format!("{:?}", a.status)}
                    {a.rejection_reason
                        .as_ref()
                        .map(|r| view! { <span class="rejection-note">{format!(" ({r})")}</span> })}
                </td>
                <td>
                    {history_link
                        .map(|href| view! { <A href=href>"Doctor History"</A> })}
                </td>
            </tr>
        }
    };

    view! {
        <div class="page my-appointments">
            <h2>"My Appointments"</h2>
            <div class="tab-bar">
                <button
                    class:active=move || tab.get() == Tab::Upcoming
                    on:click=move |_| tab.set(Tab::Upcoming)
                >
                    "Upcoming"
                </button>
                <button
                    class:active=move || tab.get() == Tab::Pending
                    on:click=move |_| tab.set(Tab::Pending)
                >
                    "Pending"
                </button>
                <button
                    class:active=move || tab.get() == Tab::Past
                    on:click=move |_| tab.set(Tab::Past)
                >
                    "Past"
                </button>
            </div>
            <Suspense fallback=|| view! { <p>"Loading appointments..."</p> }>
                {move || {
                    appointments.get().map(|result| match result {
                        Ok(list) => {
                            let filtered: Vec<_> = list
                                .iter()
                                .filter(|a| tab_matches(tab.get(), a.status))
                                .collect();
                            if filtered.is_empty() {
                                view! { <p class="empty-state">"No appointments here."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"When"</th>
                                                <th>"Doctor"</th>
                                                <th>"Reason"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>{filtered.into_iter().map(row).collect_view()}</tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        }
                        Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
