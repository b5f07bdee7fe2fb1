//! Admin roster planner: one week at a time, one row per staff member.
//! Approved leave shadows the shift selector for the affected days.

use leptos::prelude::*;
use time::Duration;

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{SetShiftRequest, ShiftType};
use crate::util::roster_grid::{RosterCell, RosterGrid};
use crate::util::{dates, spawn_ui};

#[component]
pub fn RosterPage() -> impl IntoView {
    let week_start = RwSignal::new(dates::week_range(dates::today()).0);
    let error = RwSignal::new(String::new());

    let data = LocalResource::new(move || {
        let start = week_start.get();
        async move {
            let end = start + Duration::days(6);
            let staff = api::roster_staff().await?;
            let rosters = api::list_rosters(
                &dates::format_iso_date(start),
                &dates::format_iso_date(end),
            )
            .await?;
            let leaves = api::list_leaves().await?;
            Ok::<_, ApiError>((staff, rosters, leaves))
        }
    });

    let assign = move |staff_id: String, date: String, value: String| {
        let Some(shift) = ShiftType::ALL.into_iter().find(|s| s.as_str() == value) else {
            return;
        };
        error.set(String::new());
        spawn_ui(async move {
            let body = SetShiftRequest {
                staff_member: staff_id,
                date,
                shift_type: shift,
            };
            match api::set_shift(&body).await {
                Ok(_) => data.refetch(),
                Err(err) => error.set(err.to_string()),
            }
        });
    };

    let shift_week = move |days: i64| {
        week_start.update(|start| *start += Duration::days(days));
    };

    view! {
        <div class="page roster-page">
            <h2>"Weekly Roster"</h2>
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
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>
            <Suspense fallback=|| view! { <p>"Loading roster..."</p> }>
                {move || {
                    data.get().map(|result| match result {
                        Ok((staff, rosters, leaves)) => {
                            let grid = RosterGrid::build(&rosters, &leaves);
                            let days = dates::week_days(week_start.get());
                            view! {
                                <table class="data-table roster-table">
                                    <thead>
                                        <tr>
                                            <th>"Staff"</th>
                                            {days
                                                .iter()
                                                .map(|day| {
                                                    view! {
                                                        <th>
                                                            {format!(
                                                                "{} {}",
                                                                day.weekday(),
                                                                dates::format_iso_date(*day),
                                                            )}
                                                        </th>
                                                    }
                                                })
                                                .collect_view()}
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {staff
                                            .iter()
                                            .map(|member| {
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {format!(
                                                                "{} ({})",
                                                                member.full_name(),
                                                                member.role.as_str(),
                                                            )}
                                                        </td>
                                                        {days
                                                            .iter()
                                                            .map(|day| {
                                                                let cell = grid.resolve(&member.id, *day);
                                                                let staff_id = member.id.clone();
                                                                let date = dates::format_iso_date(*day);
                                                                match cell {
                                                                    RosterCell::OnLeave(kind) => {
                                                                        view! {
                                                                            <td class="cell-on-leave">
                                                                                {format!("On Leave ({})", kind.as_str())}
                                                                            </td>
                                                                        }
                                                                            .into_any()
                                                                    }
                                                                    RosterCell::Shift(shift) => {
                                                                        view! {
                                                                            <td>
                                                                                <select
                                                                                    prop:value=shift.as_str()
                                                                                    on:change=move |ev| {
                                                                                        assign(
                                                                                            staff_id.clone(),
                                                                                            date.clone(),
                                                                                            event_target_value(&ev),
                                                                                        );
                                                                                    }
                                                                                >
                                                                                    {ShiftType::ALL
                                                                                        .into_iter()
                                                                                        .map(|s| {
                                                                                            view! {
                                                                                                <option
                                                                                                    value=s.as_str()
                                                                                                    selected=s == shift
                                                                                                >
                                                                                                    {s.as_str()}
                                                                                                </option>
                                                                                            }
                                                                                        })
                                                                                        .collect_view()}
                                                                                </select>
                                                                            </td>
                                                                        }
                                                                            .into_any()
                                                                    }
                                                                }
                                                            })
                                                            .collect_view()}
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
