//! Patient workspace for the doctor: the health record alongside forms to
//! add a diagnosis, write a prescription, and order a lab test.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{
    AddDiagnosisRequest, CreatePrescriptionRequest, Medication, OrderLabTestRequest,
};
use crate::util::spawn_ui;

#[component]
pub fn PatientDetailPage() -> impl IntoView {
    let params = use_params_map();
    let patient_id = move || params.read().get("patientId").unwrap_or_default();

    let data = LocalResource::new(move || {
        let id = patient_id();
        async move {
            let patient = api::get_staff_patient(&id).await?;
            let ehr = api::get_ehr(&id).await?;
            Ok::<_, ApiError>((patient, ehr))
        }
    });

    let message = RwSignal::new(String::new());

    // -- diagnosis form --
    let diagnosis = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let submit_diagnosis = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = patient_id();
        message.set(String::new());
        spawn_ui(async move {
            let body = AddDiagnosisRequest {
                diagnosis: diagnosis.get_untracked(),
                notes: notes.get_untracked(),
            };
            match api::add_diagnosis(&id, &body).await {
                Ok(()) => {
                    message.set("Diagnosis added.".to_owned());
                    diagnosis.set(String::new());
                    notes.set(String::new());
                    data.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    // -- prescription form --
    let med_name = RwSignal::new(String::new());
    let dosage = RwSignal::new(String::new());
    let frequency = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());

    let submit_prescription = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = patient_id();
        message.set(String::new());
        spawn_ui(async move {
            let body = CreatePrescriptionRequest {
                patient_id: id,
                medications: vec![Medication {
                    name: med_name.get_untracked(),
                    dosage: dosage.get_untracked(),
                    frequency: frequency.get_untracked(),
                    duration: duration.get_untracked(),
                }],
            };
            match api::create_prescription(&body).await {
                Ok(_) => {
                    message.set("Prescription sent to the pharmacy.".to_owned());
                    med_name.set(String::new());
                    dosage.set(String::new());
                    frequency.set(String::new());
                    duration.set(String::new());
                    data.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    // -- lab order form --
    let test_name = RwSignal::new(String::new());

    let submit_lab_order = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = patient_id();
        message.set(String::new());
        spawn_ui(async move {
            let body = OrderLabTestRequest {
                patient_id: id,
                test_name: test_name.get_untracked(),
            };
            match api::order_lab_test(&body).await {
                Ok(_) => {
                    message.set("Lab test ordered.".to_owned());
                    test_name.set(String::new());
                    data.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="page patient-detail-page">
            <Show when=move || !message.get().is_empty()>
                <p class="status-message">{move || message.get()}</p>
            </Show>
            <Suspense fallback=|| view! { <p>"Loading patient record..."</p> }>
                {move || {
                    data.get().map(|result| match result {
                        Ok((patient, ehr)) => {
                            view! {
                                <h2>{format!("{} — {}", patient.full_name(), patient.uhid)}</h2>

                                <div class="panel-grid">
                                    <div class="panel">
                                        <h3>"Vitals"</h3>
                                        <ul>
                                            {ehr.vitals
                                                .iter()
                                                .map(|v| {
                                                    view! {
                                                        <li>
                                                            {format!(
                                                                "BP {} | Temp {} | HR {} | RR {} ({})",
                                                                v.blood_pressure,
                                                                v.temperature,
                                                                v.heart_rate,
                                                                v.respiratory_rate,
                                                                v.recorded_at.clone().unwrap_or_default(),
                                                            )}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>

                                        <h3>"Diagnosis History"</h3>
                                        <ul>
                                            {ehr.diagnoses
                                                .iter()
                                                .map(|d| {
                                                    view! {
                                                        <li>
                                                            {format!(
                                                                "{} — {} ({})",
                                                                d.diagnosis,
                                                                d.notes.clone().unwrap_or_default(),
                                                                d.diagnosed_by
                                                                    .as_ref()
                                                                    .map_or_else(
                                                                        || "Record deleted".to_owned(),
                                                                        |p| p.full_name(),
                                                                    ),
                                                            )}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>

                                        <h3>"Lab Reports"</h3>
                                        <ul>
                                            {ehr.lab_reports
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <li>
                                                            {format!(
                                                                "{} — {}",
                                                                t.test_name,
                                                                t.result
                                                                    .clone()
                                                                    .unwrap_or_else(|| "Pending".to_owned()),
                                                            )}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>

                                    <div class="panel">
                                        <h3>"Add Diagnosis"</h3>
                                        <form on:submit=submit_diagnosis>
                                            <label>
                                                "Diagnosis"
                                                <input
                                                    type="text"
                                                    prop:value=move || diagnosis.get()
                                                    on:input=move |ev| diagnosis.set(event_target_value(&ev))
                                                    required
                                                />
                                            </label>
                                            <label>
                                                "Notes"
                                                <textarea
                                                    prop:value=move || notes.get()
                                                    on:input=move |ev| notes.set(event_target_value(&ev))
                                                ></textarea>
                                            </label>
                                            <button type="submit" class="btn btn--primary">"Add"</button>
                                        </form>

                                        <h3>"Write Prescription"</h3>
                                        <form on:submit=submit_prescription>
                                            <label>
                                                "Medicine"
                                                <input
                                                    type="text"
                                                    prop:value=move || med_name.get()
                                                    on:input=move |ev| med_name.set(event_target_value(&ev))
                                                    required
                                                />
                                            </label>
                                            <label>
                                                "Dosage"
                                                <input
                                                    type="text"
                                                    prop:value=move || dosage.get()
                                                    on:input=move |ev| dosage.set(event_target_value(&ev))
                                                    required
                                                />
                                            </label>
                                            <label>
                                                "Frequency"
                                                <input
                                                    type="text"
                                                    prop:value=move || frequency.get()
                                                    on:input=move |ev| frequency.set(event_target_value(&ev))
                                                    required
                                                />
                                            </label>
                                            <label>
                                                "Duration"
                                                <input
                                                    type="text"
                                                    prop:value=move || duration.get()
                                                    on:input=move |ev| duration.set(event_target_value(&ev))
                                                    required
                                                />
                                            </label>
                                            <button type="submit" class="btn btn--primary">"Prescribe"</button>
                                        </form>

                                        <h3>"Order Lab Test"</h3>
                                        <form on:submit=submit_lab_order>
                                            <label>
                                                "Test Name"
                                                <input
                                                    type="text"
                                                    prop:value=move || test_name.get()
                                                    on:input=move |ev| test_name.set(event_target_value(&ev))
                                                    required
                                                />
                                            </label>
                                            <button type="submit" class="btn btn--primary">"Order"</button>
                                        </form>
                                    </div>
                                </div>
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
