//! History with one doctor: the patient's prescriptions and lab orders
//! filtered down to that doctor.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::patient_api;

#[component]
pub fn DoctorHistoryPage() -> impl IntoView {
    let params = use_params_map();
    let doctor_id = move || params.read().get("doctorId").unwrap_or_default();

    let ehr = LocalResource::new(patient_api::my_ehr);

    view! {
        <div class="page doctor-history">
            <h2>"Doctor History"</h2>
            <Suspense fallback=|| view! { <p>"Loading history..."</p> }>
                {move || {
                    ehr.get().map(|result| match result {
                        Ok(record) => {
                            let wanted = doctor_id();
                            let prescriptions: Vec<_> = record
                                .prescriptions
                                .iter()
                                .filter(|rx| {
                                    rx.doctor.as_ref().is_some_and(|d| d.id == wanted)
                                })
                                .cloned()
                                .collect();
                            let lab_tests: Vec<_> = record
                                .lab_reports
                                .iter()
                                .filter(|t| t.doctor.as_ref().is_some_and(|d| d.id == wanted))
                                .cloned()
                                .collect();
                            let doctor_name = prescriptions
                                .iter()
                                .find_map(|rx| rx.doctor.clone())
                                .or_else(|| lab_tests.iter().find_map(|t| t.doctor.clone()))
                                .map(|d| format!("Dr. {}", d.full_name()));
                            view! {
                                {doctor_name.map(|name| view! { <h3>{name}</h3> })}

                                <div class="panel">
                                    <h4>"Prescriptions"</h4>
                                    {if prescriptions.is_empty() {
                                        view! {
                                            <p class="empty-state">"No prescriptions from this doctor."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul>
                                                {prescriptions
                                                    .iter()
                                                    .map(|rx| {
                                                        let meds = rx
                                                            .medications
                                                            .iter()
                                                            .map(|m| m.name.clone())
                                                            .collect::<Vec<_>>()
                                                            .join(", ");
                                                        view! {
                                                            <li>
                                                                {format!(
                                                                    "{} — {meds} ({:?})",
                                                                    rx.created_at.clone().unwrap_or_default(),
                                                                    rx.status,
                                                                )}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        }
                                            .into_any()
                                    }}
                                </div>

                                <div class="panel">
                                    <h4>"Lab Tests"</h4>
                                    {if lab_tests.is_empty() {
                                        view! {
                                            <p class="empty-state">"No lab tests from this doctor."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul>
                                                {lab_tests
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
                                        }
                                            .into_any()
                                    }}
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
