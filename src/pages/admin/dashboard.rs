//! Admin home: the service manager, which promotes inventory items into
//! billable catalog entries.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::AddServiceRequest;
use crate::util::spawn_ui;

const BILLING_CATEGORIES: [&str; 5] = [
    "Pharmacy",
    "Surgical Supplies",
    "Lab Test",
    "Consultation",
    "Procedure",
];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let services = api::list_services().await?;
        let inventory = api::list_inventory().await?;
        Ok::<_, ApiError>((services, inventory))
    });

    let name = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let category = RwSignal::new("Pharmacy".to_owned());
    let message = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get_untracked().is_empty() {
            message.set("Please select an item from the inventory list.".to_owned());
            return;
        }
        let Ok(parsed_cost) = cost.get_untracked().parse::<f64>() else {
            message.set("Enter a valid billing cost".to_owned());
            return;
        };
        message.set(String::new());
        spawn_ui(async move {
            let body = AddServiceRequest {
                name: name.get_untracked(),
                cost: parsed_cost,
                category: category.get_untracked(),
            };
            match api::add_service(&body).await {
                Ok(_) => {
                    message.set("Service added successfully!".to_owned());
                    name.set(String::new());
                    cost.set(String::new());
                    category.set("Pharmacy".to_owned());
                    data.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="page admin-dashboard">
            <h2>"Admin Dashboard"</h2>
            <p class="subtitle">"Manage your hospital's core operations from this control center."</p>

            <div class="panel service-manager">
                <h3>"Manage Hospital Services"</h3>
                <Show when=move || !message.get().is_empty()>
                    <p class="status-message">{move || message.get()}</p>
                </Show>
                <form on:submit=submit>
                    <label>
                        "Select Inventory Item to Make Billable"
                        <select
                            prop:value=move || name.get()
                            on:change=move |ev| name.set(event_target_value(&ev))
                            required
                        >
                            <option value="">"-- Select an Item --"</option>
                            {move || {
                                data.get()
                                    .and_then(Result::ok)
                                    .map(|(services, inventory)| {
                                        // Items already in the catalog cannot be
                                        // added twice.
                                        let existing: std::collections::HashSet<String> =
                                            services.iter().map(|s| s.name.clone()).collect();
                                        inventory
                                            .into_iter()
                                            .filter(|item| !existing.contains(&item.name))
                                            .map(|item| {
                                                view! {
                                                    <option value=item.name.clone()>
                                                        {format!("{} ({})", item.name, item.category)}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </select>
                    </label>
                    <label>
                        "Billing Cost ($)"
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || cost.get()
                            on:input=move |ev| cost.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Billing Category"
                        <select
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            {BILLING_CATEGORIES
                                .into_iter()
                                .map(|c| view! { <option value=c>{c}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button type="submit" class="btn btn--primary">"Add Service"</button>
                </form>
            </div>

            <div class="panel">
                <h3>"Current Services"</h3>
                <Suspense fallback=|| view! { <p>"Loading services..."</p> }>
                    {move || {
                        data.get().map(|result| match result {
                            Ok((services, _)) => {
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
                                            {services
                                                .into_iter()
                                                .map(|svc| {
                                                    view! {
                                                        <tr>
                                                            <td>{svc.name}</td>
                                                            <td>{svc.category}</td>
                                                            <td>{format!("${:.2}", svc.cost)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="error-message">{err.to_string()}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
