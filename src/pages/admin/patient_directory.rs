//! Read-only patient directory with the selected patient's health record,
//! including prescription slip downloads.

use leptos::prelude::*;

use crate::export::download::trigger_download;
use crate::export::reports::prescription_document;
use crate::net::api;
use crate::net::types::{EhrRecord, Patient, Prescription};
use crate::util::spawn_ui;

fn download_prescription(prescription: &Prescription) {
    let doc = prescription_document(prescription);
    let filename = format!("Prescription_{}.txt", prescription.id);
    trigger_download(&filename, "text/plain", &doc.render_text());
}

#[component]
pub fn PatientDirectoryPage() -> impl IntoView {
    let patients = LocalResource::new(api::list_patients);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Patient>);
    let ehr = RwSignal::new(None::<EhrRecord>);
    let error = RwSignal::new(String::new());

    let select = move |patient: Patient| {
        error.set(String::new());
        ehr.set(None);
        let id = patient.id.clone();
        selected.set(Some(patient));
        spawn_ui(async move {
            match api::get_ehr(&id).await {
                Ok(record) => ehr.set(Some(record)),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="page patient-directory">
            <h2>"Patient Directory"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>
            <input
                class="search-box"
                type="search"
                placeholder="Search by Name or UHID..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <div class="directory-layout">
                <Suspense fallback=|| view! { <p>"Loading patients..."</p> }>
                    {move || {
                        patients.get().map(|result| match result {
                            Ok(list) => {
                                let needle = search.get().to_lowercase();
                                let filtered: Vec<_> = list
                                    .into_iter()
                                    .filter(|p| {
                                        needle.is_empty()
                                            || p.full_name().to_lowercase().contains(&needle)
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
                                                    <li on:click=move |_| select(pick.clone())>
                                                        {format!("{} ({})", p.full_name(), p.uhid)}
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
                            view! {
                                <div class="panel patient-detail">
                                    <h3>{patient.full_name()}</h3>
                                    <p>{format!("UHID: {}", patient.uhid)}</p>
                                    <p>
                                        {format!(
                                            "Date of Birth: {}",
                                            patient.date_of_birth.clone().unwrap_or_default(),
                                        )}
                                    </p>
                                    {move || {
                                        ehr.get()
                                            .map(|record| {
                                                view! {
                                                    <h4>"Diagnoses"</h4>
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
                                                    <h4>"Prescriptions"</h4>
                                                    <ul>
                                                        {record
                                                            .prescriptions
                                                            .iter()
                                                            .map(|rx| {
                                                                let slip = rx.clone();
                                                                view! {
                                                                    <li>
                                                                        {format!(
                                                                            "{} medication(s), {:?}",
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
                                                    <h4>"Lab Reports"</h4>
                                                    <ul>
                                                        {record
                                                            .lab_reports
                                                            .iter()
                                                            .map(|test| {
                                                                view! {
                                                                    <li>
                                                                        {format!(
                                                                            "{} — {:?}",
                                                                            test.test_name, test.status,
                                                                        )}
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                }
                                            })
                                    }}
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
