//! The patient's consolidated bill with an invoice download.

use leptos::prelude::*;

use crate::export::download::trigger_download;
use crate::export::reports::invoice_document;
use crate::net::patient_api;

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[component]
pub fn MyBillsPage() -> impl IntoView {
    let bill = LocalResource::new(patient_api::my_bill);

    view! {
        <div class="page my-bills">
            <h2>"My Bills"</h2>
            <Suspense fallback=|| view! { <p>"Loading your bill..."</p> }>
                {move || {
                    bill.get().map(|result| match result {
                        Ok(bill) => {
                            let invoice = bill.clone();
                            view! {
                                <div class="panel">
                                    <div class="bill-header">
                                        <h3>{format!("Status: {}", bill.status)}</h3>
                                        <button
                                            class="btn"
                                            on:click=move |_| {
                                                let doc = invoice_document(&invoice);
                                                trigger_download(
                                                    &format!("Invoice_{}.txt", invoice.id),
                                                    "text/plain",
                                                    &doc.render_text(),
                                                );
                                            }
                                        >
                                            "Download Invoice"
                                        </button>
                                    </div>
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Description"</th>
                                                <th>"Quantity"</th>
                                                <th>"Cost"</th>
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
                                                            <td>{money(item.cost * item.quantity)}</td>
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
