//! Pharmacist dashboard: pending prescription queue, fulfillment history,
//! and the low-stock watchlist.

use leptos::prelude::*;

use crate::export::download::trigger_download;
use crate::export::reports::prescription_document;
use crate::net::api;
use crate::net::types::Prescription;
use crate::util::spawn_ui;

fn medication_summary(prescription: &Prescription) -> String {
    prescription
        .medications
        .iter()
        .map(|m| format!("{} ({}, {}, {})", m.name, m.dosage, m.frequency, m.duration))
        .collect::<Vec<_>>()
        .join("; ")
}

fn export_slip(prescription: &Prescription) {
    let doc = prescription_document(prescription);
    let filename = format!("Prescription_{}.txt", prescription.id);
    trigger_download(&filename, "text/plain", &doc.render_text());
}

#[component]
pub fn PharmacistPage() -> impl IntoView {
    let pending = LocalResource::new(api::pending_prescriptions);
    let history = LocalResource::new(api::all_prescriptions);
    let low_stock = LocalResource::new(api::low_stock_inventory);
    let show_history = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let fulfill = move |id: String| {
        error.set(String::new());
        spawn_ui(async move {
            match api::fulfill_prescription(&id).await {
                Ok(()) => {
                    pending.refetch();
                    history.refetch();
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let prescription_table = move |items: Vec<Prescription>, with_fulfill: bool| {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Patient"</th>
                        <th>"Doctor"</th>
                        <th>"Medications"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {items
                        .into_iter()
                        .map(|rx| {
                            let summary = medication_summary(&rx);
                            let fulfill_id = rx.id.clone();
                            let slip = rx.clone();
                            view! {
                                <tr>
                                    <td>
                                        {rx.patient
                                            .as_ref()
                                            .map_or_else(|| "Record deleted".to_owned(), |p| p.full_name())}
                                    </td>
                                    <td>
                                        {rx.doctor
                                            .as_ref()
                                            .map_or_else(|| "Record deleted".to_owned(), |d| d.full_name())}
                                    </td>
                                    <td>{summary}</td>
                                    <td>{format!("{:?}", rx.status)}</td>
                                    <td>
                                        {with_fulfill
                                            .then(|| {
                                                let id = fulfill_id.clone();
                                                view! {
                                                    <button
                                                        class="btn btn--small btn--primary"
                                                        on:click=move |_| fulfill(id.clone())
                                                    >
                                                        "Fulfill"
                                                    </button>
                                                }
                                            })}
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| export_slip(&slip)
                                        >
                                            "Download"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
    };

    view! {
        <div class="page pharmacist-page">
            <h2>"Pharmacy"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>

            <div class="tab-bar">
                <button
                    class:active=move || !show_history.get()
                    on:click=move |_| show_history.set(false)
                >
                    "Pending Queue"
                </button>
                <button
                    class:active=move || show_history.get()
                    on:click=move |_| show_history.set(true)
                >
                    "History"
                </button>
            </div>

            <Suspense fallback=|| view! { <p>"Loading prescriptions..."</p> }>
                {move || {
                    let resource = if show_history.get() { history } else { pending };
                    resource.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="empty-state">"No prescriptions here."</p> }.into_any()
                        }
                        Ok(items) => prescription_table(items, !show_history.get()).into_any(),
                        Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>

            <h3>"Low Stock"</h3>
            <Suspense fallback=|| view! { <p>"Loading inventory..."</p> }>
                {move || {
                    low_stock.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="empty-state">"All items above reorder level."</p> }
                                .into_any()
                        }
                        Ok(items) => {
                            view! {
                                <ul class="low-stock-list">
                                    {items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <li>
                                                    {format!(
                                                        "{} — {} left (reorder at {})",
                                                        item.name, item.quantity, item.reorder_level,
                                                    )}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
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
