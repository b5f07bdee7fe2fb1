//! Leave administration: pending requests with approve/reject, and the
//! processed history.
//!
//! Decisions are applied optimistically: the row flips status at once and
//! the PATCH follows; if it fails the prior status is restored and the
//! error shown, the same snapshot-and-rollback shape the notification
//! bells use.

#[cfg(test)]
#[path = "leave_management_test.rs"]
mod leave_management_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{LeaveRequest, LeaveStatus};
use crate::util::spawn_ui;

/// Flip one request's status in place, returning the prior status for
/// rollback. `None` if the id is not in the list; nothing is touched then.
fn apply_status(items: &mut [LeaveRequest], id: &str, status: LeaveStatus) -> Option<LeaveStatus> {
    let entry = items.iter_mut().find(|l| l.id == id)?;
    let prior = entry.status;
    entry.status = status;
    Some(prior)
}

#[component]
pub fn LeaveManagementPage() -> impl IntoView {
    let leaves = LocalResource::new(api::list_leaves);
    let list = RwSignal::new(Vec::<LeaveRequest>::new());
    let show_history = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    // Mirror each fetch into the working copy the decisions mutate.
    Effect::new(move |_| {
        if let Some(Ok(items)) = leaves.get() {
            list.set(items);
        }
    });

    let decide = move |id: String, status: LeaveStatus| {
        error.set(String::new());
        let prior = list
            .try_update(|items| apply_status(items, &id, status))
            .flatten();
        let Some(prior) = prior else {
            return;
        };
        spawn_ui(async move {
            if let Err(err) = api::set_leave_status(&id, status).await {
                list.update(|items| {
                    apply_status(items, &id, prior);
                });
                error.set(err.to_string());
            }
        });
    };

    let table = move |items: Vec<LeaveRequest>, pending: bool| {
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Staff Member"</th>
                        <th>"Type"</th>
                        <th>"Dates"</th>
                        <th>"Reason"</th>
                        <th>{if pending { "Actions" } else { "Status" }}</th>
                    </tr>
                </thead>
                <tbody>
                    {items
                        .into_iter()
                        .map(|leave| {
                            let approve_id = leave.id.clone();
                            let reject_id = leave.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        {leave
                                            .staff_member
                                            .as_ref()
                                            .map_or_else(|| "Record deleted".to_owned(), |s| s.full_name())}
                                    </td>
                                    <td>{leave.leave_type.as_str()}</td>
                                    <td>{format!("{} — {}", leave.start_date, leave.end_date)}</td>
                                    <td>{leave.reason.clone()}</td>
                                    <td>
                                        {if pending {
                                            view! {
                                                <button
                                                    class="btn btn--small btn--primary"
                                                    on:click=move |_| {
                                                        decide(approve_id.clone(), LeaveStatus::Approved);
                                                    }
                                                >
                                                    "Approve"
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click=move |_| {
                                                        decide(reject_id.clone(), LeaveStatus::Rejected);
                                                    }
                                                >
                                                    "Reject"
                                                </button>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span>{format!("{:?}", leave.status)}</span> }
                                                .into_any()
                                        }}
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
        <div class="page leave-management">
            <h2>"Leave Management"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>
            <div class="tab-bar">
                <button
                    class:active=move || !show_history.get()
                    on:click=move |_| show_history.set(false)
                >
                    "Pending Requests"
                </button>
                <button
                    class:active=move || show_history.get()
                    on:click=move |_| show_history.set(true)
                >
                    "History"
                </button>
            </div>
            <Suspense fallback=|| view! { <p>"Loading leave requests..."</p> }>
                {move || {
                    leaves.get().map(|result| match result {
                        Ok(_) => {
                            let pending = !show_history.get();
                            let filtered: Vec<_> = list
                                .get()
                                .into_iter()
                                .filter(|l| (l.status == LeaveStatus::Pending) == pending)
                                .collect();
                            if filtered.is_empty() {
                                view! { <p class="empty-state">"Nothing here."</p> }.into_any()
                            } else {
                                table(filtered, pending).into_any()
                            }
                        }
                        Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
