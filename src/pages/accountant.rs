//! Accountant dashboard: every bill with collected/outstanding totals, plus
//! the billable service catalog.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[component]
pub fn AccountantPage() -> impl IntoView {
    let bills = LocalResource::new(api::list_bills);
    let services = LocalResource::new(api::list_services);

    view! {
        <div class="page accountant-page">
            <h2>"Billing Overview"</h2>

            <Suspense fallback=|| view! { <p>"Loading bills..."</p> }>
                {move || {
                    bills.get().map(|result| match result {
                        Ok(list) => {
                            let collected: f64 = list.iter().map(|b| b.amount_paid).sum();
                            let outstanding: f64 = list.iter().map(|b| b.balance_due()).sum();
                            view! {
                                <div class="kpi-row">
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Revenue Collected"</span>
                                        <span class="kpi-value">{money(collected)}</span>
                                    </div>
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Outstanding"</span>
                                        <span class="kpi-value">{money(outstanding)}</span>
                                    </div>
                                </div>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Patient"</th>
                                            <th>"UHID"</th>
                                            <th>"Total"</th>
                                            <th>"Paid"</th>
                                            <th>"Balance"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|bill| {
                                                let patient_name = bill
                                                    .patient
                                                    .as_ref()
                                                    .map_or_else(|| "Record deleted".to_owned(), |p| p.full_name());
                                                let uhid = bill
                                                    .patient
                                                    .as_ref()
                                                    .map_or_else(|| "-".to_owned(), |p| p.uhid.clone());
                                                let detail = bill
                                                    .patient
                                                    .as_ref()
                                                    .map(|p| format!("/accountant/bill/{}", p.id));
                                                view! {
                                                    <tr>
                                                        <td>{patient_name}</td>
                                                        <td>{uhid}</td>
                                                        <td>{money(bill.total_amount)}</td>
                                                        <td>{money(bill.amount_paid)}</td>
                                                        <td>{money(bill.balance_due())}</td>
                                                        <td>{bill.status.clone()}</td>
                                                        <td>
                                                            {detail
                                                                .map(|href| {
                                                                    view! { <A href=href>"View Bill"</A> }
                                                                })}
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

            <h3>"Service Catalog"</h3>
            <Suspense fallback=|| view! { <p>"Loading services..."</p> }>
                {move || {
                    services.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Service"</th>
                                            <th>"Category"</th>
                                            <th>"Cost"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|svc| {
                                                view! {
                                                    <tr>
                                                        <td>{svc.name}</td>
                                                        <td>{svc.category}</td>
                                                        <td>{money(svc.cost)}</td>
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
