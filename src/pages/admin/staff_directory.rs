//! Staff directory: searchable roster with registration, profile editing,
//! deletion, per-member reports, and the spreadsheet export.

use leptos::prelude::*;

use crate::export::download::trigger_download;
use crate::export::reports::staff_report_document;
use crate::export::spreadsheet::{staff_directory_csv, staff_directory_filename};
use crate::net::api;
use crate::net::types::{RegisterStaffRequest, Role, StaffMember};
use crate::util::{dates, spawn_ui};

fn export_directory(staff: &[StaffMember]) {
    let csv = staff_directory_csv(staff);
    let filename = staff_directory_filename(dates::today());
    trigger_download(&filename, "text/csv", &csv);
}

fn export_report(staff: &StaffMember) {
    let doc = staff_report_document(staff);
    let filename = format!("Staff_Report_{}_{}.txt", staff.first_name, staff.last_name);
    trigger_download(&filename, "text/plain", &doc.render_text());
}

#[component]
pub fn StaffDirectoryPage() -> impl IntoView {
    let staff = LocalResource::new(api::list_staff);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<StaffMember>);
    let message = RwSignal::new(String::new());

    // -- registration form --
    let show_register = RwSignal::new(false);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("Doctor".to_owned());
    let phone = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());

    let register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(picked) = Role::ALL
            .into_iter()
            .find(|r| r.as_str() == role.get_untracked())
        else {
            return;
        };
        message.set(String::new());
        spawn_ui(async move {
            let opt = |s: String| if s.is_empty() { None } else { Some(s) };
            let body = RegisterStaffRequest {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                role: picked,
                phone: opt(phone.get_untracked()),
                specialization: opt(specialization.get_untracked()),
            };
            match api::register_staff(&body).await {
                Ok(member) => {
                    message.set(format!("{} registered successfully!", member.full_name()));
                    first_name.set(String::new());
                    last_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    phone.set(String::new());
                    specialization.set(String::new());
                    show_register.set(false);
                    staff.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    // -- edit form (leave allotment and contact details) --
    let edit_phone = RwSignal::new(String::new());
    let edit_total_leave = RwSignal::new(String::new());
    let editing = RwSignal::new(false);

    let open_edit = move |member: &StaffMember| {
        edit_phone.set(member.phone.clone().unwrap_or_default());
        edit_total_leave.set(
            member
                .total_leave_days
                .map(|d| d.to_string())
                .unwrap_or_default(),
        );
        editing.set(true);
    };

    let save_edit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(member) = selected.get_untracked() else {
            return;
        };
        let Ok(total) = edit_total_leave.get_untracked().parse::<u32>() else {
            message.set("Total leave days must be a whole number".to_owned());
            return;
        };
        message.set(String::new());
        spawn_ui(async move {
            let body = serde_json::json!({
                "phone": edit_phone.get_untracked(),
                "totalLeaveDays": total,
            });
            match api::update_staff(&member.id, &body).await {
                Ok(updated) => {
                    selected.set(Some(updated));
                    editing.set(false);
                    staff.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    let delete = move |_| {
        let Some(member) = selected.get_untracked() else {
            return;
        };
        message.set(String::new());
        spawn_ui(async move {
            match api::delete_staff(&member.id).await {
                Ok(()) => {
                    message.set(format!("{} removed.", member.full_name()));
                    selected.set(None);
                    staff.refetch();
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="page staff-directory">
            <div class="page-header">
                <h2>"Staff Directory"</h2>
                <div class="export-actions">
                    <button class="btn" on:click=move |_| show_register.update(|v| *v = !*v)>
                        "Register New Staff"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| {
                            if let Some(Ok(list)) = staff.get() {
                                export_directory(&list);
                            }
                        }
                    >
                        "Export to Excel"
                    </button>
                </div>
            </div>
            <Show when=move || !message.get().is_empty()>
                <p class="status-message">{move || message.get()}</p>
            </Show>

            <Show when=move || show_register.get()>
                <form class="panel register-form" on:submit=register>
                    <h3>"Register New Staff"</h3>
                    <label>
                        "First Name"
                        <input
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Last Name"
                        <input
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Role"
                        <select
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Phone"
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Specialization"
                        <input
                            type="text"
                            prop:value=move || specialization.get()
                            on:input=move |ev| specialization.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn--primary">"Register"</button>
                </form>
            </Show>

            <input
                class="search-box"
                type="search"
                placeholder="Search by name..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <div class="directory-layout">
                <Suspense fallback=|| view! { <p>"Loading staff..."</p> }>
                    {move || {
                        staff.get().map(|result| match result {
                            Ok(list) => {
                                let needle = search.get().to_lowercase();
                                let filtered: Vec<_> = list
                                    .into_iter()
                                    .filter(|s| {
                                        needle.is_empty()
                                            || s.full_name().to_lowercase().contains(&needle)
                                    })
                                    .collect();
                                view! {
                                    <ul class="staff-list">
                                        {filtered
                                            .into_iter()
                                            .map(|member| {
                                                let pick = member.clone();
                                                view! {
                                                    <li on:click=move |_| {
                                                        editing.set(false);
                                                        selected.set(Some(pick.clone()));
                                                    }>
                                                        <span>{member.full_name()}</span>
                                                        <span class="role-badge">{member.role.as_str()}</span>
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
                        .map(|member| {
                            let report = member.clone();
                            let edit_target = member.clone();
                            let opt = |v: &Option<String>| {
                                v.clone().unwrap_or_else(|| "N/A".to_owned())
                            };
                            view! {
                                <div class="panel staff-detail">
                                    <h3>{member.full_name()}</h3>
                                    <p>{format!("Role: {}", member.role.as_str())}</p>
                                    <p>{format!("Email: {}", member.email)}</p>
                                    <p>{format!("Phone: {}", opt(&member.phone))}</p>
                                    <p>{format!("Specialization: {}", opt(&member.specialization))}</p>
                                    <p>
                                        {format!(
                                            "Leave: {} taken of {} ({} left)",
                                            member.leave_taken.unwrap_or_default(),
                                            member.total_leave_days.unwrap_or_default(),
                                            member.leave_balance.unwrap_or_default(),
                                        )}
                                    </p>
                                    <div class="button-row">
                                        <button
                                            class="btn"
                                            on:click=move |_| export_report(&report)
                                        >
                                            "Download Report"
                                        </button>
                                        <button class="btn" on:click=move |_| open_edit(&edit_target)>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--danger" on:click=delete>
                                            "Delete Staff"
                                        </button>
                                    </div>
                                    <Show when=move || editing.get()>
                                        <form class="edit-form" on:submit=save_edit>
                                            <label>
                                                "Phone"
                                                <input
                                                    type="tel"
                                                    prop:value=move || edit_phone.get()
                                                    on:input=move |ev| {
                                                        edit_phone.set(event_target_value(&ev));
                                                    }
                                                />
                                            </label>
                                            <label>
                                                "Total Leave Days Allotment"
                                                <input
                                                    type="number"
                                                    min="0"
                                                    prop:value=move || edit_total_leave.get()
                                                    on:input=move |ev| {
                                                        edit_total_leave.set(event_target_value(&ev));
                                                    }
                                                    required
                                                />
                                            </label>
                                            <button type="submit" class="btn btn--primary">
                                                "Save Changes"
                                            </button>
                                        </form>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
