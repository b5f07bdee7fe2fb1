//! Hospital analytics: KPI cards plus the appointment-status and
//! registration breakdowns.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;
use time::Duration;

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::CountBucket;
use crate::util::dates;

/// The last seven days (oldest first) with registration counts, zero-filled
/// for days the aggregation returned no bucket.
fn last_seven_days(buckets: &[CountBucket], today: time::Date) -> Vec<(String, u64)> {
    (0..7)
        .rev()
        .map(|back| {
            let key = dates::format_iso_date(today - Duration::days(back));
            let count = buckets
                .iter()
                .find(|b| b.key == key)
                .map_or(0, |b| b.count);
            (key, count)
        })
        .collect()
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let kpis = api::analytics_kpis().await?;
        let by_status = api::appointments_by_status().await?;
        let registrations = api::patient_registrations().await?;
        Ok::<_, ApiError>((kpis, by_status, registrations))
    });

    view! {
        <div class="page analytics-page">
            <h2>"Hospital Analytics Dashboard"</h2>
            <Suspense fallback=|| view! { <p>"Loading analytics dashboard..."</p> }>
                {move || {
                    data.get().map(|result| match result {
                        Ok((kpis, by_status, registrations)) => {
                            let last_week = last_seven_days(&registrations, dates::today());
                            view! {
                                <div class="kpi-row">
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Total Patients"</span>
                                        <span class="kpi-value">{kpis.total_patients}</span>
                                    </div>
                                    <div class="kpi-card">
                                        <span class="kpi-label">"New Patients Today"</span>
                                        <span class="kpi-value">{kpis.new_patients_today}</span>
                                    </div>
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Approved Appointments Today"</span>
                                        <span class="kpi-value">{kpis.appointments_today}</span>
                                    </div>
                                    <div class="kpi-card">
                                        <span class="kpi-label">"Total Revenue"</span>
                                        <span class="kpi-value">
                                            {format!("${:.2}", kpis.total_revenue)}
                                        </span>
                                    </div>
                                </div>

                                <div class="chart-grid">
                                    <div class="panel">
                                        <h3>"Patient Registrations (Last 7 Days)"</h3>
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Date"</th>
                                                    <th>"New Patients"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {last_week
                                                    .into_iter()
                                                    .map(|(date, count)| {
                                                        view! {
                                                            <tr>
                                                                <td>{date}</td>
                                                                <td>{count}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
                                    <div class="panel">
                                        <h3>"Appointments by Status"</h3>
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Status"</th>
                                                    <th>"Count"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {by_status
                                                    .into_iter()
                                                    .map(|bucket| {
                                                        view! {
                                                            <tr>
                                                                <td>{bucket.key}</td>
                                                                <td>{bucket.count}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
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
