//! Bill detail for one patient: line items, payment history, payment entry,
//! and the downloadable invoice.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::export::download::trigger_download;
use crate::export::reports::invoice_document;
use crate::net::api;
use crate::net::types::{Bill, RecordPaymentRequest};
use crate::util::spawn_ui;

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

fn export_invoice(bill: &Bill) {
    let doc = invoice_document(bill);
    let filename = format!("Invoice_{}.txt", bill.id);
    trigger_download(&filename, "text/plain", &doc.render_text());
}

#[component]
pub fn AccountantBillPage() -> impl IntoView {
    let params = use_params_map();
    let patient_id = move || params.read().get("patientId").unwrap_or_default();

    let bill = LocalResource::new(move || {
        let id = patient_id();
        async move { api::get_patient_bill(&id).await }
    });
    let amount = RwSignal::new(String::new());
    let method = RwSignal::new("Cash".to_owned());
    let error = RwSignal::new(String::new());

    let record = move |ev: leptos::ev::SubmitEvent, bill_id: String| {
        ev.prevent_default();
        let Ok(parsed) = amount.get_untracked().parse::<f64>() else {
            error.set("Enter a valid payment amount".to_owned());
            return;
        };
        if parsed <= 0.0 {
            error.set("Payment must be greater than zero".to_owned());
            return;
        }
        error.set(String::new());
        spawn_ui(async move {
            let body = RecordPaymentRequest {
                amount: parsed,
                payment_method: method.get_untracked(),
            };
            match api::record_payment(&bill_id, &body).await {
                Ok(_) => {
                    amount.set(String::new());
                    bill.refetch();
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="page bill-page">
            <h2>"Patient Bill"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>
            <Suspense fallback=|| view! { <p>"Loading bill..."</p> }>
                {move || {
                    bill.get().map(|result| match result {
                        Ok(bill) => {
                            let invoice = bill.clone();
                            let bill_id = bill.id.clone();
                            view! {
                                <div class="bill-header">
                                    <h3>
                                        {bill.patient
                                            .as_ref()
                                            .map_or_else(|| "Record deleted".to_owned(), |p| p.full_name())}
                                    </h3>
                                    <button class="btn" on:click=move |_| export_invoice(&invoice)>
                                        "Download Invoice"
                                    </button>
                                </div>

                                <h4>"Charges"</h4>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Description"</th>
                                            <th>"Quantity"</th>
                                            <th>"Unit Cost"</th>
                                            <th>"Total"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {bill.line_items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <tr>
                                                        <td>{item.description.clone()}</td>
                                                        <td>{format!("{}", item.quantity)}</td>
                                                        <td>{money(item.cost)}</td>
                                                        <td>{money(item.cost * item.quantity)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>

                                <h4>"Payment History"</h4>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Date"</th>
                                            <th>"Method"</th>
                                            <th>"Recorded By"</th>
                                            <th>"Amount"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {bill.payment_history
                                            .iter()
                                            .map(|p| {
                                                view! {
                                                    <tr>
                                                        <td>{p.payment_date.clone()}</td>
                                                        <td>{p.payment_method.clone()}</td>
                                                        <td>
                                                            {p.recorded_by
                                                                .as_ref()
                                                                .map_or_else(
                                                                    || "Record deleted".to_owned(),
                                                                    |r| r.full_name(),
                                                                )}
                                                        </td>
                                                        <td>{money(p.amount)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>

                                <div class="bill-summary">
                                    <p>"Total: " {money(bill.total_amount)}</p>
                                    <p>"Paid: " {money(bill.amount_paid)}</p>
                                    <p class="balance">"Balance Due: " {money(bill.balance_due())}</p>
                                </div>

                                <form
                                    class="payment-form"
                                    on:submit=move |ev| record(ev, bill_id.clone())
                                >
                                    <label>
                                        "Amount"
                                        <input
                                            type="number"
                                            min="0"
                                            step="0.01"
                                            prop:value=move || amount.get()
                                            on:input=move |ev| amount.set(event_target_value(&ev))
                                            required
                                        />
                                    </label>
                                    <label>
                                        "Method"
                                        <select
                                            prop:value=move || method.get()
                                            on:change=move |ev| method.set(event_target_value(&ev))
                                        >
                                            <option value="Cash">"Cash"</option>
                                            <option value="Card">"Card"</option>
                                            <option value="UPI">"UPI"</option>
                                            <option value="Insurance">"Insurance"</option>
                                        </select>
                                    </label>
                                    <button type="submit" class="btn btn--primary">
                                        "Record Payment"
                                    </button>
                                </form>
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
