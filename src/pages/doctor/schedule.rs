//! Weekly availability editor for the logged-in doctor. Saved availability
//! drives the slot lookups on the booking forms.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::DayAvailability;
use crate::util::spawn_ui;

#[component]
pub fn ManageSchedulePage() -> impl IntoView {
    let schedule = LocalResource::new(api::get_my_schedule);

    view! {
        <div class="page manage-schedule">
            <h2>"Manage My Weekly Schedule"</h2>
            <Suspense fallback=|| view! { <p>"Loading your schedule..."</p> }>
                {move || {
                    schedule.get().map(|result| match result {
                        Ok(loaded) => {
                            view! { <ScheduleEditor initial=loaded.weekly_availability/> }
                                .into_any()
                        }
                        Err(err) => view! { <p class="error-message">{err.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ScheduleEditor(initial: Vec<DayAvailability>) -> impl IntoView {
    let days = RwSignal::new(initial);
    let message = RwSignal::new(String::new());

    let update_day = move |index: usize, apply: &dyn Fn(&mut DayAvailability)| {
        days.update(|list| {
            if let Some(day) = list.get_mut(index) {
                apply(day);
            }
        });
    };

    let save = move |_| {
        message.set(String::new());
        spawn_ui(async move {
            match api::update_my_availability(&days.get_untracked()).await {
                Ok(updated) => {
                    days.set(updated.weekly_availability);
                    message.set("Schedule updated successfully!".to_owned());
                }
                Err(err) => message.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="schedule-editor">
            <Show when=move || !message.get().is_empty()>
                <p class="status-message">{move || message.get()}</p>
            </Show>
            <table class="data-table schedule-table">
                <thead>
                    <tr>
                        <th>"Day"</th>
                        <th>"Available?"</th>
                        <th>"Start Time"</th>
                        <th>"End Time"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each={move || days.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(_, day)| day.day.clone()
                        children=move |(index, day)| {
                            let available = day.is_available;
                            view! {
                                <tr>
                                    <td>{day.day.clone()}</td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=available
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                update_day(index, &|d| d.is_available = checked);
                                            }
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="time"
                                            prop:value=day.start_time.clone()
                                            prop:disabled=!available
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                update_day(index, &|d| d.start_time = value.clone());
                                            }
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="time"
                                            prop:value=day.end_time.clone()
                                            prop:disabled=!available
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                update_day(index, &|d| d.end_time = value.clone());
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <button class="btn btn--primary" on:click=save>"Save Changes"</button>
        </div>
    }
}
