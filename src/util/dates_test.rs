use super::*;
use time::macros::date;

#[test]
fn parses_plain_dates_and_timestamps() {
    assert_eq!(parse_iso_date("2026-08-26"), Some(date!(2026 - 08 - 26)));
    assert_eq!(
        parse_iso_date("2026-08-26T14:30:00.000Z"),
        Some(date!(2026 - 08 - 26))
    );
    assert_eq!(parse_iso_date("not-a-date!"), None);
    assert_eq!(parse_iso_date(""), None);
}

#[test]
fn format_round_trips() {
    let d = date!(2026 - 01 - 05);
    assert_eq!(parse_iso_date(&format_iso_date(d)), Some(d));
    assert_eq!(format_iso_date(d), "2026-01-05");
}

#[test]
fn week_range_starts_sunday_ends_saturday() {
    // 2026-08-26 is a Wednesday.
    let (start, end) = week_range(date!(2026 - 08 - 26));
    assert_eq!(start, date!(2026 - 08 - 23));
    assert_eq!(end, date!(2026 - 08 - 29));
    assert_eq!(start.weekday(), time::Weekday::Sunday);
    assert_eq!(end.weekday(), time::Weekday::Saturday);
}

#[test]
fn week_range_of_a_sunday_is_itself() {
    let (start, end) = week_range(date!(2026 - 08 - 23));
    assert_eq!(start, date!(2026 - 08 - 23));
    assert_eq!(end, date!(2026 - 08 - 29));
}

#[test]
fn week_days_yields_seven_consecutive_days() {
    let days = week_days(date!(2026 - 08 - 23));
    assert_eq!(days.len(), 7);
    for pair in days.windows(2) {
        assert_eq!(pair[1] - pair[0], time::Duration::days(1));
    }
    assert_eq!(days[6], date!(2026 - 08 - 29));
}

#[test]
fn expand_span_is_inclusive() {
    let days = expand_span(date!(2026 - 08 - 30), date!(2026 - 09 - 02));
    assert_eq!(days.len(), 4);
    assert_eq!(days[0], date!(2026 - 08 - 30));
    assert_eq!(days[3], date!(2026 - 09 - 02));
}

#[test]
fn expand_span_single_day_and_inverted() {
    assert_eq!(expand_span(date!(2026 - 08 - 30), date!(2026 - 08 - 30)).len(), 1);
    assert!(expand_span(date!(2026 - 08 - 30), date!(2026 - 08 - 29)).is_empty());
}
