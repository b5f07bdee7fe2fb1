//! Receptionist dashboard: patient registration, appointment booking with
//! live slot lookup, and portal account creation.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{BookAppointmentRequest, Patient, RegisterPatientRequest};
use crate::util::phone::{PHONE_PREFIX, is_valid_phone, sanitize_phone};
use crate::util::{dates, spawn_ui};

fn generate_uhid() -> String {
    #[cfg(feature = "csr")]
    let millis = js_sys::Date::now() as u64;
    #[cfg(not(feature = "csr"))]
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or_default())
        .unwrap_or_default();
    let digits = millis.to_string();
    let tail = digits.len().saturating_sub(8);
    format!("UHID{}", &digits[tail..])
}

#[component]
pub fn ReceptionistPage() -> impl IntoView {
    let patients = LocalResource::new(api::list_staff_patients);
    let doctors = LocalResource::new(api::list_doctors);

    // -- register patient form --
    let uhid = RwSignal::new(generate_uhid());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let gender = RwSignal::new("Male".to_owned());
    let phone = RwSignal::new(PHONE_PREFIX.to_owned());
    let patient_message = RwSignal::new(String::new());

    let register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !is_valid_phone(&phone.get_untracked()) {
            patient_message.set("Phone number must be 10 digits long.".to_owned());
            return;
        }
        patient_message.set(String::new());
        spawn_ui(async move {
            let body = RegisterPatientRequest {
                uhid: uhid.get_untracked(),
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                date_of_birth: date_of_birth.get_untracked(),
                gender: gender.get_untracked(),
                phone: phone.get_untracked(),
            };
            match api::register_patient(&body).await {
                Ok(patient) => {
                    patient_message
                        .set(format!("Patient {} registered successfully!", patient.first_name));
                    uhid.set(generate_uhid());
                    first_name.set(String::new());
                    last_name.set(String::new());
                    date_of_birth.set(String::new());
                    gender.set("Male".to_owned());
                    phone.set(PHONE_PREFIX.to_owned());
                    patients.refetch();
                }
                Err(err) => patient_message.set(err.to_string()),
            }
        });
    };

    // -- book appointment form --
    let appt_patient = RwSignal::new(String::new());
    let appt_doctor = RwSignal::new(String::new());
    let appt_date = RwSignal::new(String::new());
    let appt_time = RwSignal::new(String::new());
    let appt_reason = RwSignal::new(String::new());
    let appt_message = RwSignal::new(String::new());
    let slots = RwSignal::new(Vec::<String>::new());
    let slots_loading = RwSignal::new(false);

    // Refresh the slot list whenever the doctor or the date changes.
    Effect::new(move |_| {
        let doctor = appt_doctor.get();
        let date = appt_date.get();
        appt_time.set(String::new());
        if doctor.is_empty() || date.is_empty() {
            slots.set(Vec::new());
            return;
        }
        slots_loading.set(true);
        spawn_ui(async move {
            match api::available_slots(&doctor, &date).await {
                Ok(found) => slots.set(found.available_slots),
                Err(_) => slots.set(Vec::new()),
            }
            slots_loading.set(false);
        });
    });

    let book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        appt_message.set(String::new());
        spawn_ui(async move {
            let body = BookAppointmentRequest {
                patient_id: Some(appt_patient.get_untracked()),
                doctor_id: appt_doctor.get_untracked(),
                appointment_date: appt_date.get_untracked(),
                appointment_time: appt_time.get_untracked(),
                reason: appt_reason.get_untracked(),
            };
            match api::book_appointment(&body).await {
                Ok(_) => {
                    appt_message
                        .set("Appointment booked successfully! Awaiting doctor approval.".to_owned());
                    appt_patient.set(String::new());
                    appt_doctor.set(String::new());
                    appt_date.set(String::new());
                    appt_reason.set(String::new());
                    slots.set(Vec::new());
                }
                Err(err) => appt_message.set(err.to_string()),
            }
        });
    };

    // -- portal account management --
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Patient>);
    let portal_message = RwSignal::new(String::new());

    let create_portal = move |_| {
        let Some(patient) = selected.get_untracked() else {
            return;
        };
        portal_message.set(String::new());
        spawn_ui(async move {
            match api::create_portal_account(&patient.id).await {
                Ok(()) => {
                    portal_message.set("Portal account created and SMS sent!".to_owned());
                    selected.update(|s| {
                        if let Some(p) = s {
                            p.has_portal_account = true;
                        }
                    });
                    patients.refetch();
                }
                Err(err) => portal_message.set(err.to_string()),
            }
        });
    };

    let today = dates::format_iso_date(dates::today());

    view! {
        <div class="page receptionist-page">
            <h2>"Receptionist Dashboard"</h2>

            <div class="panel-grid">
                <div class="panel">
                    <h3>"Register New Patient"</h3>
                    <Show when=move || !patient_message.get().is_empty()>
                        <p class="status-message">{move || patient_message.get()}</p>
                    </Show>
                    <form on:submit=register>
                        <label>
                            "UHID"
                            <input type="text" prop:value=move || uhid.get() readonly/>
                        </label>
                        <label>
                            "First Name"
                            <input
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Last Name"
                            <input
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Date of Birth"
                            <input
                                type="date"
                                prop:value=move || date_of_birth.get()
                                on:input=move |ev| date_of_birth.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Gender"
                            <select
                                prop:value=move || gender.get()
                                on:change=move |ev| gender.set(event_target_value(&ev))
                            >
                                <option value="Male">"Male"</option>
                                <option value="Female">"Female"</option>
                                <option value="Other">"Other"</option>
                            </select>
                        </label>
                        <label>
                            "Phone Number"
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| {
                                    phone.update(|p| *p = sanitize_phone(p, &event_target_value(&ev)));
                                }
                                required
                            />
                        </label>
                        <button type="submit" class="btn btn--primary">"Register Patient"</button>
                    </form>
                </div>

                <div class="panel">
                    <h3>"Book Appointment"</h3>
                    <Show when=move || !appt_message.get().is_empty()>
                        <p class="status-message">{move || appt_message.get()}</p>
                    </Show>
                    <form on:submit=book>
                        <label>
                            "Patient"
                            <select
                                prop:value=move || appt_patient.get()
                                on:change=move |ev| appt_patient.set(event_target_value(&ev))
                                required
                            >
                                <option value="">"Select Patient"</option>
                                {move || {
                                    patients
                                        .get()
                                        .and_then(Result::ok)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|p| {
                                            view! { <option value=p.id.clone()>{p.full_name()}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                        <label>
                            "Doctor"
                            <select
                                prop:value=move || appt_doctor.get()
                                on:change=move |ev| appt_doctor.set(event_target_value(&ev))
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
                                            view! {
                                                <option value=d.id.clone()>
                                                    {format!("Dr. {}", d.full_name())}
                                                </option>
                                            }
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
                                prop:value=move || appt_date.get()
                                on:input=move |ev| appt_date.set(event_target_value(&ev))
                                prop:disabled=move || appt_doctor.get().is_empty()
                                required
                            />
                        </label>
                        <label>
                            "Available Time"
                            <select
                                prop:value=move || appt_time.get()
                                on:change=move |ev| appt_time.set(event_target_value(&ev))
                                prop:disabled=move || appt_date.get().is_empty() || slots_loading.get()
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
                            "Reason for Visit (Optional)"
                            <input
                                type="text"
                                prop:value=move || appt_reason.get()
                                on:input=move |ev| appt_reason.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="btn btn--primary">"Book Appointment"</button>
                    </form>
                </div>
            </div>

            <div class="panel">
                <h3>"Patient Directory & Portal Management"</h3>
                <input
                    class="search-box"
                    type="search"
                    placeholder="Search by Name or UHID..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Suspense fallback=|| view! { <p>"Loading patients..."</p> }>
                    {move || {
                        patients.get().map(|result| match result {
                            Ok(list) => {
                                let needle = search.get().to_lowercase();
                                let filtered: Vec<_> = list
                                    .into_iter()
                                    .filter(|p| {
                                        needle.is_empty()
                                            || p.first_name.to_lowercase().contains(&needle)
                                            || p.last_name.to_lowercase().contains(&needle)
                                            || p.uhid.to_lowercase().contains(&needle)
                                    })
                                    .collect();
                                view! {
                                    <ul class="patient-list">
                                        {filtered
                                            .into_iter()
                                            .map(|p| {
                                                let pick = p.clone();
                                                view! {
                                                    <li on:click=move |_| selected.set(Some(pick.clone()))>
                                                        <span>
                                                            {format!("{} ({})", p.full_name(), p.uhid)}
                                                        </span>
                                                        <span class="status-badge">
                                                            {if p.has_portal_account {
                                                                "Portal Active"
                                                            } else {
                                                                "No Portal"
                                                            }}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="error-message">{err.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
                {move || {
                    selected
                        .get()
                        .map(|patient| {
                            let can_create = !patient.has_portal_account && patient.phone.is_some();
                            view! {
                                <div class="portal-panel">
                                    <h4>"Create Portal Account"</h4>
                                    <p>
                                        "This will send an SMS with a portal link to "
                                        <strong>{patient.full_name()}</strong>
                                        " on their number: "
                                        <strong>
                                            {patient
                                                .phone
                                                .clone()
                                                .unwrap_or_else(|| "Not Provided".to_owned())}
                                        </strong>
                                    </p>
                                    <Show when=move || !portal_message.get().is_empty()>
                                        <p class="status-message">{move || portal_message.get()}</p>
                                    </Show>
                                    <button
                                        class="btn btn--primary"
                                        prop:disabled=!can_create
                                        on:click=create_portal
                                    >
                                        {if patient.has_portal_account {
                                            "Account Exists"
                                        } else {
                                            "Create & Send SMS"
                                        }}
                                    </button>
                                    <button class="btn" on:click=move |_| selected.set(None)>
                                        "Cancel"
                                    </button>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
