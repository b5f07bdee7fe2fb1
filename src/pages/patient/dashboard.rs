//! Portal home: book a new appointment and see what's coming up.

use leptos::prelude::*;

use crate::net::patient_api;
use crate::net::types::{AppointmentStatus, BookAppointmentRequest};
use crate::state::patient_auth::PatientAuthState;
use crate::util::{dates, spawn_ui};

#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<PatientAuthState>>();
    let doctors = LocalResource::new(patient_api::portal_doctors);
    let appointments = LocalResource::new(patient_api::my_appointments);

    let doctor_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let slots = RwSignal::new(Vec::<String>::new());
    let slots_loading = RwSignal::new(false);

    Effect::new(move |_| {
        let doctor = doctor_id.get();
        let day = date.get();
        time.set(String::new());
        if doctor.is_empty() || day.is_empty() {
            slots.set(Vec::new());
            return;
        }
        slots_loading.set(true);
        spawn_ui(async move {
            match patient_api::available_slots(&doctor, &day).await {
                Ok(found) => slots.set(found.available_slots),
                Err(_) => slots.set(Vec::new()),
            }
            slots_loading.set(false);
        });
    });

    let book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        spawn_ui(async move {
            let body = BookAppointmentRequest {
                // The backend resolves the patient from the bearer token.
                patient_id: None,
                doctor_id: doctor_id.get_untracked(),
                appointment_date: date.get_untracked(),
                appointment_time: time.get_untracked(),
                reason: reason.get_untracked(),
            };
            match patient_api::book_appointment(&body).await {
                Ok(_) => {
                    message.set("Appointment requested! You'll be notified once the doctor approves.".to_owned());
                    doctor_id.set(String::new());
                    date.set(String::new());
                    reason.set(String::new());
                    slots.set(Vec::new());
                    appointments.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    let today = dates::format_iso_date(dates::today());

    view! {
        <div class="page patient-dashboard">
            <h2>
                {move || {
                    format!(
                        "Welcome, {}!",
                        auth.get().patient.map(|p| p.full_name()).unwrap_or_default(),
                    )
                }}
            </h2>

            <div class="panel">
                <h3>"Book an Appointment"</h3>
                <Show when=move || !message.get().is_empty()>
                    <p class="status-message">{move || message.get()}</p>
                </Show>
                <form on:submit=book>
                    <label>
                        "Doctor"
                        <select
                            prop:value=move || doctor_id.get()
                            on:change=move |ev| doctor_id.set(event_target_value(&ev))
                            required
                        >
                            <option value="">"Select Doctor"</option>
                            {move || {
                                doctors
                                    .get()
                                    .and_then(Result::ok)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|d| {
                                        let label = match &d.specialization {
                                            Some(spec) => {
                                                format!("Dr. {} — {spec}", d.full_name())
                                            }
                                            None => format!("Dr. {}", d.full_name()),
                                        };
                                        view! { <option value=d.id.clone()>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label>
                        "Date"
                        <input
                            type="date"
                            min=today
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                            prop:disabled=move || doctor_id.get().is_empty()
                            required
                        />
                    </label>
                    <label>
                        "Available Time"
                        <select
                            prop:value=move || time.get()
                            on:change=move |ev| time.set(event_target_value(&ev))
                            prop:disabled=move || date.get().is_empty() || slots_loading.get()
                            required
                        >
                            <option value="">
                                {move || {
                                    if slots_loading.get() { "Loading..." } else { "Select a Time" }
                                }}
                            </option>
                            {move || {
                                slots
                                    .get()
                                    .into_iter()
                                    .map(|slot| {
                                        view! { <option value=slot.clone()>{slot.clone()}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label>
                        "Reason"
                        <input
                            type="text"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn--primary">"Request Appointment"</button>
                </form>
            </div>

            <div class="panel">
                <h3>"Upcoming Appointments"</h3>
                <Suspense fallback=|| view! { <p>"Loading appointments..."</p> }>
                    {move || {
                        appointments.get().map(|result| match result {
                            Ok(list) => {
                                let upcoming: Vec<_> = list
                                    .into_iter()
                                    .filter(|a| {
                                        matches!(
                                            a.status,
                                            AppointmentStatus::Pending | AppointmentStatus::Approved,
                                        )
                                    })
                                    .collect();
                                if upcoming.is_empty() {
                                    view! { <p class="empty-state">"Nothing scheduled."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="appointment-list">
                                            {upcoming
                                                .into_iter()
                                                .map(|a| {
                                                    view! {
                                                        <li>
                                                            {format!(
                                                                "{} at {} with {} — {:?}",
                                                                a.appointment_date,
                                                                a.appointment_time,
                                                                a.doctor
                                                                    .as_ref()
                                                                    .map_or_else(
                                                                        || "Record deleted".to_owned(),
                                                                        |d| format!("Dr. {}", d.full_name()),
                                                                    ),
                                                                a.status,
                                                            )}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! { <p class="error-message">{err.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
