//! Lab technician dashboard: pending test queue with result entry, plus the
//! completed-test history with report downloads.

use leptos::prelude::*;

use crate::export::download::trigger_download;
use crate::export::reports::lab_report_document;
use crate::net::api;
use crate::net::types::{LabTest, LabTestStatus};
use crate::util::spawn_ui;

fn export_report(test: &LabTest) {
    let doc = lab_report_document(test);
    let filename = format!("Lab_Report_{}.txt", test.id);
    trigger_download(&filename, "text/plain", &doc.render_text());
}

#[component]
pub fn LabPage() -> impl IntoView {
    let pending = LocalResource::new(api::pending_lab_tests);
    let history = LocalResource::new(api::all_lab_tests);
    let show_history = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let selected = RwSignal::new(None::<LabTest>);
    let result_text = RwSignal::new(String::new());

    let submit_result = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(test) = selected.get_untracked() else {
            return;
        };
        let result = result_text.get_untracked();
        if result.trim().is_empty() {
            error.set("A result is required to complete the test".to_owned());
            return;
        }
        error.set(String::new());
        spawn_ui(async move {
            match api::complete_lab_test(&test.id, &result).await {
                Ok(()) => {
                    selected.set(None);
                    result_text.set(String::new());
                    pending.refetch();
                    history.refetch();
                }
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let test_table = move |items: Vec<LabTest>| {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Test"</th>
                        <th>"Patient"</th>
                        <th>"Ordered By"</th>
                        <th>"Status"</th>
                        <th>"Result"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {items
                        .into_iter()
                        .map(|test| {
                            let is_pending = test.status == LabTestStatus::Pending;
                            let open = test.clone();
                            let report = test.clone();
                            view! {
                                <tr>
                                    <td>{test.test_name.clone()}</td>
                                    <td>
                                        {test.patient
                                            .as_ref()
                                            .map_or_else(|| "Record deleted".to_owned(), |p| p.full_name())}
                                    </td>
                                    <td>
                                        {test.doctor
                                            .as_ref()
                                            .map_or_else(|| "Record deleted".to_owned(), |d| d.full_name())}
                                    </td>
                                    <td>{format!("{:?}", test.status)}</td>
                                    <td>{test.result.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                    <td>
                                        {is_pending
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--small btn--primary"
                                                        on:click=move |_| selected.set(Some(open.clone()))
                                                    >
                                                        "Enter Result"
                                                    </button>
                                                }
                                            })}
                                        {(!is_pending)
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| export_report(&report)
                                                    >
                                                        "Download Report"
                                                    </button>
                                                }
                                            })}
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
        <div class="page lab-page">
            <h2>"Laboratory"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>

            <Show when=move || selected.get().is_some()>
                <div class="panel result-form">
                    <h3>
                        "Complete Test — "
                        {move || selected.get().map(|t| t.test_name).unwrap_or_default()}
                    </h3>
                    <form on:submit=submit_result>
                        <label>
                            "Result"
                            <textarea
                                prop:value=move || result_text.get()
                                on:input=move |ev| result_text.set(event_target_value(&ev))
                                required
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn--primary">"Save Result"</button>
                        <button type="button" class="btn" on:click=move |_| selected.set(None)>
                            "Cancel"
                        </button>
                    </form>
                </div>
            </Show>

            <div class="tab-bar">
                <button
                    class:active=move || !show_history.get()
                    on:click=move |_| show_history.set(false)
                >
                    "Pending Tests"
                </button>
                <button
                    class:active=move || show_history.get()
                    on:click=move |_| show_history.set(true)
                >
                    "All Tests"
                </button>
            </div>

            <Suspense fallback=|| view! { <p>"Loading lab tests..."</p> }>
                {move || {
                    let resource = if show_history.get() { history } else { pending };
                    resource.get().map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="empty-state">"No tests here."</p> }.into_any()
                        }
                        Ok(items) => test_table(items).into_any(),
                        Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
