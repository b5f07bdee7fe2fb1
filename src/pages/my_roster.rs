//! A staff member's own week of shifts, as day cards.

use leptos::prelude::*;
use time::Duration;

use crate::net::api;
use crate::net::types::ShiftType;
use crate::state::auth::AuthState;
use crate::util::dates;

#[component]
pub fn MyRosterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let week_start = RwSignal::new(dates::week_range(dates::today()).0);

    let entries = LocalResource::new(move || {
        let start = week_start.get();
        async move {
            let end = start + Duration::days(6);
            api::list_rosters(
                &dates::format_iso_date(start),
                &dates::format_iso_date(end),
            )
            .await
        }
    });

    let shift_week = move |days: i64| {
        week_start.update(|start| *start += Duration::days(days));
    };

    view! {
        <div class="page my-roster-page">
            <h2>"My Weekly Roster"</h2>
            <div class="roster-controls">
                <button class="btn" on:click=move |_| shift_week(-7)>"Previous Week"</button>
                <h3>
                    {move || {
                        let start = week_start.get();
                        format!(
                            "Week of {} — {}",
                            dates::format_iso_date(start),
                            dates::format_iso_date(start + Duration::days(6)),
                        )
                    }}
                </h3>
                <button class="btn" on:click=move |_| shift_week(7)>"Next Week"</button>
            </div>
            <Suspense fallback=|| view! { <p>"Loading your schedule..."</p> }>
                {move || {
                    entries.get().map(|result| match result {
                        Ok(list) => {
                            let my_id = auth.get().user.map(|u| u.id).unwrap_or_default();
                            // Key this user's entries by day; everyone else's
                            // rows are ignored.
                            let mine: std::collections::HashMap<String, ShiftType> = list
                                .iter()
                                .filter(|e| {
                                    e.staff_member.as_ref().is_some_and(|s| s.id == my_id)
                                })
                                .filter_map(|e| {
                                    let day = dates::parse_iso_date(&e.date)?;
                                    Some((dates::format_iso_date(day), e.shift_type))
                                })
                                .collect();
                            view! {
                                <div class="roster-cards">
                                    {dates::week_days(week_start.get())
                                        .iter()
                                        .map(|day| {
                                            let key = dates::format_iso_date(*day);
                                            let shift = mine
                                                .get(&key)
                                                .copied()
                                                .unwrap_or(ShiftType::DayOff);
                                            view! {
                                                <div class="roster-card">
                                                    <div class="card-header">
                                                        {format!("{}", day.weekday())}
                                                        <span class="card-date">{key.clone()}</span>
                                                    </div>
                                                    <div class="card-body">
                                                        <p>{shift.as_str()}</p>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
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
