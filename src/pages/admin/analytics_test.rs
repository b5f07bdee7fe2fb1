use super::*;

#[test]
fn fills_missing_days_with_zero() {
    let today =
        time::Date::from_calendar_date(2026, time::Month::August, 29).expect("valid date");
    let buckets = vec![
        CountBucket {
            key: "2026-08-29".to_owned(),
            count: 3,
        },
        CountBucket {
            key: "2026-08-25".to_owned(),
            count: 1,
        },
    ];
    let series = last_seven_days(&buckets, today);
    assert_eq!(series.len(), 7);
    assert_eq!(series[0], ("2026-08-23".to_owned(), 0));
    assert_eq!(series[2], ("2026-08-25".to_owned(), 1));
    assert_eq!(series[6], ("2026-08-29".to_owned(), 3));
}

#[test]
fn series_is_oldest_first_and_contiguous() {
    let today =
        time::Date::from_calendar_date(2026, time::Month::March, 3).expect("valid date");
    let series = last_seven_days(&[], today);
    assert_eq!(series[0].0, "2026-02-25");
    assert_eq!(series[6].0, "2026-03-03");
    assert!(series.iter().all(|(_, count)| *count == 0));
}
