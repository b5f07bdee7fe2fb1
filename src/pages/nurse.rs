//! Nurse dashboard: patient list with a vitals entry form.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Patient, RecordVitalsRequest};
use crate::util::spawn_ui;

#[component]
pub fn NursePage() -> impl IntoView {
    let patients = LocalResource::new(api::list_patients);
    let selected = RwSignal::new(None::<Patient>);
    let message = RwSignal::new(String::new());

    let blood_pressure = RwSignal::new(String::new());
    let temperature = RwSignal::new(String::new());
    let heart_rate = RwSignal::new(String::new());
    let respiratory_rate = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(patient) = selected.get_untracked() else {
            return;
        };
        message.set(String::new());
        spawn_ui(async move {
            let body = RecordVitalsRequest {
                blood_pressure: blood_pressure.get_untracked(),
                temperature: temperature.get_untracked(),
                heart_rate: heart_rate.get_untracked(),
                respiratory_rate: respiratory_rate.get_untracked(),
            };
            match api::record_vitals(&patient.id, &body).await {
                Ok(()) => {
                    message.set(format!("Vitals recorded for {}", patient.full_name()));
                    blood_pressure.set(String::new());
                    temperature.set(String::new());
                    heart_rate.set(String::new());
                    respiratory_rate.set(String::new());
                    selected.set(None);
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    let field = move |label: &'static str, placeholder: &'static str, signal: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                    required
                />
            </label>
        }
    };

    view! {
        <div class="page nurse-page">
            <h2>"Nurse Dashboard"</h2>
            <Show when=move || !message.get().is_empty()>
                <p class="status-message">{move || message.get()}</p>
            </Show>
            <Show when=move || selected.get().is_some()>
                <div class="panel vitals-form">
                    <h3>
                        "Record Vitals — "
                        {move || selected.get().map(|p| p.full_name()).unwrap_or_default()}
                    </h3>
                    <form on:submit=submit>
                        {field("Blood Pressure", "120/80", blood_pressure)}
                        {field("Temperature", "98.6 F", temperature)}
                        {field("Heart Rate", "72 bpm", heart_rate)}
                        {field("Respiratory Rate", "16 /min", respiratory_rate)}
                        <button type="submit" class="btn btn--primary">"Save Vitals"</button>
                        <button type="button" class="btn" on:click=move |_| selected.set(None)>
                            "Cancel"
                        </button>
                    </form>
                </div>
            </Show>
            <Suspense fallback=|| view! { <p>"Loading patients..."</p> }>
                {move || {
                    patients.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"UHID"</th>
                                            <th>"Name"</th>
                                            <th>"Gender"</th>
                                            <th>"Phone"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|patient| {
                                                let row = patient.clone();
                                                view! {
                                                    <tr>
                                                        <td>{patient.uhid.clone()}</td>
                                                        <td>{patient.full_name()}</td>
                                                        <td>{patient.gender.clone().unwrap_or_default()}</td>
                                                        <td>{patient.phone.clone().unwrap_or_default()}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| selected.set(Some(row.clone()))
                                                            >
                                                                "Record Vitals"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                        Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
