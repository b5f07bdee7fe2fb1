//! A staff member's leave dashboard: balance cards, application form, and
//! request history.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{ApplyLeaveRequest, LeaveType};
use crate::util::spawn_ui;

const LEAVE_TYPES: [LeaveType; 3] = [LeaveType::Casual, LeaveType::Sick, LeaveType::Earned];

#[component]
pub fn MyLeavePage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let mut leaves = api::my_leaves().await?;
        let me = api::get_staff_me().await?;
        // Newest application first.
        leaves.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok::<_, ApiError>((leaves, me))
    });

    let show_form = RwSignal::new(false);
    let leave_type = RwSignal::new("Casual".to_owned());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(kind) = LEAVE_TYPES
            .into_iter()
            .find(|t| t.as_str() == leave_type.get_untracked())
        else {
            return;
        };
        message.set(String::new());
        spawn_ui(async move {
            let body = ApplyLeaveRequest {
                leave_type: kind,
                start_date: start_date.get_untracked(),
                end_date: end_date.get_untracked(),
                reason: reason.get_untracked(),
            };
            match api::apply_leave(&body).await {
                Ok(_) => {
                    message.set("Leave application submitted successfully!".to_owned());
                    start_date.set(String::new());
                    end_date.set(String::new());
                    reason.set(String::new());
                    show_form.set(false);
                    data.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="page my-leave-page">
            <div class="page-header">
                <h2>"My Leave Dashboard"</h2>
                <button class="btn btn--primary" on:click=move |_| show_form.set(true)>
                    "Apply for New Leave"
                </button>
            </div>
            <Show when=move || !message.get().is_empty()>
                <p class="status-message">{move || message.get()}</p>
            </Show>

            <Show when=move || show_form.get()>
                <form class="panel leave-form" on:submit=submit>
                    <label>
                        "Leave Type"
                        <select
                            prop:value=move || leave_type.get()
                            on:change=move |ev| leave_type.set(event_target_value(&ev))
                        >
                            {LEAVE_TYPES
                                .into_iter()
                                .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Start Date"
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "End Date"
                        <input
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Reason for Leave"
                        <textarea
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                            required
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn--primary">"Submit Application"</button>
                    <button type="button" class="btn" on:click=move |_| show_form.set(false)>
                        "Cancel"
                    </button>
                </form>
            </Show>

            <Suspense fallback=|| view! { <p>"Loading your leave information..."</p> }>
                {move || {
                    data.get().map(|result| match result {
                        Ok((leaves, me)) => {
                            view! {
                                <div class="kpi-row">
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Total Allotment"</span>
                                        <span class="kpi-value">
                                            {me.total_leave_days.unwrap_or_default()}
                                        </span>
                                    </div>
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Leave Taken"</span>
                                        <span class="kpi-value">{me.leave_taken.unwrap_or_default()}</span>
                                    </div>
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Available Balance"</span>
                                        <span class="kpi-value">
                                            {me.leave_balance.unwrap_or_default()}
                                        </span>
                                    </div>
                                </div>

                                <h3>"My Leave Applications"</h3>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Dates"</th>
                                            <th>"Type"</th>
                                            <th>"Reason"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {leaves
                                            .into_iter()
                                            .map(|leave| {
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {format!("{} — {}", leave.start_date, leave.end_date)}
                                                        </td>
                                                        <td>{leave.leave_type.as_str()}</td>
                                                        <td>{leave.reason.clone()}</td>
                                                        <td>{format!("{:?}", leave.status)}</td>
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
