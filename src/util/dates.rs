//! Calendar helpers for the weekly roster views.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::macros::format_description;
use time::{Date, Duration};

const ISO_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parse a backend date string. Timestamps are tolerated by truncating to
/// the `YYYY-MM-DD` prefix.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let prefix = raw.get(..10)?;
    Date::parse(prefix, ISO_DATE).ok()
}

pub fn format_iso_date(date: Date) -> String {
    // The format description cannot fail for a valid Date.
    date.format(ISO_DATE).unwrap_or_default()
}

/// The Sunday-through-Saturday week containing `date`.
pub fn week_range(date: Date) -> (Date, Date) {
    let back = i64::from(date.weekday().number_days_from_sunday());
    let start = date - Duration::days(back);
    (start, start + Duration::days(6))
}

/// All seven days of the week starting at `start` (a Sunday).
pub fn week_days(start: Date) -> [Date; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Today's calendar date. The browser build asks the JS clock, since the
/// system clock is unavailable on `wasm32-unknown-unknown`.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = time::Month::try_from(now.get_month() as u8 + 1).unwrap_or(time::Month::January);
        Date::from_calendar_date(now.get_full_year() as i32, month, now.get_date() as u8)
            .unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Every day of an inclusive span, in order. Empty if `end < start`.
pub fn expand_span(start: Date, end: Date) -> Vec<Date> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        current += Duration::days(1);
    }
    days
}
