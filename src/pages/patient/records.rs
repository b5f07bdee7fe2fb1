//! The patient's own health record: vitals, diagnoses, prescriptions, and
//! lab reports, with slip downloads.

use leptos::prelude::*;

use crate::export::download::trigger_download;
use crate::export::reports::{lab_report_document, prescription_document};
use crate::net::patient_api;
use crate::net::types::{LabTestStatus, Prescription};

fn download_prescription(prescription: &Prescription) {
    let doc = prescription_document(prescription);
    let filename = format!("Prescription_{}.txt", prescription.id);
    trigger_download(&filename, "text/plain", &doc.render_text());
}

#[component]
pub fn MyRecordsPage() -> impl IntoView {
    let ehr = LocalResource::new(patient_api::my_ehr);

    view! {
        <div class="page my-records">
            <h2>"My Health Records"</h2>
            <Suspense fallback=|| view! { <p>"Loading your records..."</p> }>
                {move || {
                    ehr.get().map(|result| match result {
                        Ok(record) => {
                            view! {
                                <div class="panel">
                                    <h3>"Vitals"</h3>
                                    <ul>
                                        {record
                                            .vitals
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
                                </div>

                                <div class="panel">
                                    <h3>"Diagnoses"</h3>
                                    <ul>
                                        {record
                                            .diagnoses
                                            .iter()
                                            .map(|d| {
                                                view! {
                                                    <li>
                                                        {format!(
                                                            "{} ({})",
                                                            d.diagnosis,
                                                            d.diagnosed_at.clone().unwrap_or_default(),
                                                        )}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>

                                <div class="panel">
                                    <h3>"Prescriptions"</h3>
                                    <ul>
                                        {record
                                            .prescriptions
                                            .iter()
                                            .map(|rx| {
                                                let slip = rx.clone();
                                                view! {
                                                    <li>
                                                        {format!(
                                                            "{} — {} medication(s), {:?}",
                                                            rx.created_at.clone().unwrap_or_default(),
                                                            rx.medications.len(),
                                                            rx.status,
                                                        )}
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| download_prescription(&slip)
                                                        >
                                                            "Download"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>

                                <div class="panel">
                                    <h3>"Lab Reports"</h3>
                                    <ul>
                                        {record
                                            .lab_reports
                                            .iter()
                                            .map(|test| {
                                                let completed = test.status == LabTestStatus::Completed;
                                                let report = test.clone();
                                                view! {
                                                    <li>
                                                        {format!(
                                                            "{} — {}",
                                                            test.test_name,
                                                            test.result
                                                                .clone()
                                                                .unwrap_or_else(|| "Pending".to_owned()),
                                                        )}
                                                        {completed
                                                            .then(|| {
                                                                view! {
                                                                    <button
                                                                        class="btn btn--small"
                                                                        on:click=move |_| {
                                                                            let doc = lab_report_document(&report);
                                                                            trigger_download(
                                                                                &format!("Lab_Report_{}.txt", report.id),
                                                                                "text/plain",
                                                                                &doc.render_text(),
                                                                            );
                                                                        }
                                                                    >
                                                                        "Download"
                                                                    </button>
                                                                }
                                                            })}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
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
