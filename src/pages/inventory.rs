//! Inventory management: searchable stock list with low-stock flags, item
//! creation, and quantity adjustments.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{InventoryItem, UpsertInventoryRequest};
use crate::util::spawn_ui;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let items = LocalResource::new(api::list_inventory);
    let search = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let reorder_level = RwSignal::new(String::new());

    let add_item = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Ok(qty), Ok(reorder)) = (
            quantity.get_untracked().parse::<i64>(),
            reorder_level.get_untracked().parse::<i64>(),
        ) else {
            error.set("Quantity and reorder level must be whole numbers".to_owned());
            return;
        };
        error.set(String::new());
        spawn_ui(async move {
            let body = UpsertInventoryRequest {
                name: name.get_untracked(),
                category: category.get_untracked(),
                quantity: qty,
                reorder_level: reorder,
            };
            match api::add_inventory_item(&body).await {
                Ok(_) => {
                    name.set(String::new());
                    category.set(String::new());
                    quantity.set(String::new());
                    reorder_level.set(String::new());
                    items.refetch();
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let adjust = move |item: InventoryItem, delta: i64| {
        error.set(String::new());
        spawn_ui(async move {
            let body = UpsertInventoryRequest {
                name: item.name.clone(),
                category: item.category.clone(),
                quantity: (item.quantity + delta).max(0),
                reorder_level: item.reorder_level,
            };
            match api::update_inventory_item(&item.id, &body).await {
                Ok(_) => items.refetch(),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="page inventory-page">
            <h2>"Inventory"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>

            <form class="panel add-item-form" on:submit=add_item>
                <h3>"Add Item"</h3>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Category"
                    <input
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Quantity"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Reorder Level"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || reorder_level.get()
                        on:input=move |ev| reorder_level.set(event_target_value(&ev))
                        required
                    />
                </label>
                <button type="submit" class="btn btn--primary">"Add"</button>
            </form>

            <input
                class="search-box"
                type="search"
                placeholder="Search by name or category"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Suspense fallback=|| view! { <p>"Loading inventory..."</p> }>
                {move || {
                    items.get().map(|result| match result {
                        Ok(list) => {
                            let needle = search.get().to_lowercase();
                            let filtered: Vec<_> = list
                                .into_iter()
                                .filter(|item| {
                                    needle.is_empty()
                                        || item.name.to_lowercase().contains(&needle)
                                        || item.category.to_lowercase().contains(&needle)
                                })
                                .collect();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Category"</th>
                                            <th>"Quantity"</th>
                                            <th>"Reorder Level"</th>
                                            <th>"Stock"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {filtered
                                            .into_iter()
                                            .map(|item| {
                                                let low = item.quantity <= item.reorder_level;
                                                let up = item.clone();
                                                let down = item.clone();
                                                view! {
                                                    <tr class:low-stock=low>
                                                        <td>{item.name.clone()}</td>
                                                        <td>{item.category.clone()}</td>
                                                        <td>{item.quantity}</td>
                                                        <td>{item.reorder_level}</td>
                                                        <td>{if low { "Low" } else { "OK" }}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| adjust(up.clone(), 1)
                                                            >
                                                                "+"
                                                            </button>
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| adjust(down.clone(), -1)
                                                            >
                                                                "-"
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
