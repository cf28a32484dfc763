use chrono::{NaiveDate, TimeZone, Utc};
use period_series::core::{
    Granularity, generate_period_keys, subtract_units, trailing_window, trailing_window_at,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn trailing_window_ends_today_and_spans_bucket_count() {
    let today = date(2024, 3, 13);

    let day = trailing_window(Granularity::Day, 30, today);
    assert_eq!(day.start, date(2024, 2, 13));
    assert_eq!(day.end, today);

    let week = trailing_window(Granularity::Week, 12, today);
    assert_eq!(week.start, date(2023, 12, 27));

    let month = trailing_window(Granularity::Month, 7, today);
    assert_eq!(month.start, date(2023, 9, 13));

    let quarter = trailing_window(Granularity::Quarter, 4, today);
    assert_eq!(quarter.start, date(2023, 6, 13));
}

#[test]
fn single_bucket_window_starts_today() {
    let today = date(2024, 5, 20);
    for granularity in Granularity::ALL {
        let window = trailing_window(granularity, 1, today);
        assert_eq!(window.start, today);
        assert_eq!(window.end, today);
        assert!(!window.is_empty());
    }
}

#[test]
fn non_positive_bucket_count_yields_empty_window() {
    let today = date(2024, 5, 20);
    for granularity in Granularity::ALL {
        for count in [0, -1, -40] {
            let window = trailing_window(granularity, count, today);
            assert!(window.is_empty(), "{granularity} x {count}");
            assert!(window.start > window.end);
            assert!(generate_period_keys(window, granularity).is_empty());
        }
    }
}

#[test]
fn non_positive_bucket_count_is_empty_at_last_representable_date() {
    for granularity in Granularity::ALL {
        let window = trailing_window(granularity, 0, NaiveDate::MAX);
        assert!(window.is_empty(), "{granularity}");
        assert!(generate_period_keys(window, granularity).is_empty());
    }
}

#[test]
fn month_subtraction_clamps_instead_of_rolling_over() {
    assert_eq!(
        subtract_units(date(2024, 1, 31), Granularity::Month, 1),
        date(2023, 12, 31)
    );
    assert_eq!(
        subtract_units(date(2024, 3, 31), Granularity::Month, 1),
        date(2024, 2, 29)
    );
    assert_eq!(
        subtract_units(date(2024, 5, 31), Granularity::Quarter, 1),
        date(2024, 2, 29)
    );

    let window = trailing_window(Granularity::Month, 2, date(2024, 1, 31));
    assert_eq!(window.start, date(2023, 12, 31));
    let keys: Vec<String> = generate_period_keys(window, Granularity::Month)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, vec!["2023-12", "2024-01"]);
}

#[test]
fn week_subtraction_steps_whole_weeks() {
    assert_eq!(
        subtract_units(date(2024, 1, 3), Granularity::Week, 2),
        date(2023, 12, 20)
    );
    assert_eq!(
        subtract_units(date(2024, 1, 3), Granularity::Day, 3),
        date(2023, 12, 31)
    );
}

#[test]
fn trailing_window_at_uses_calendar_date_of_instant() {
    let now = Utc
        .with_ymd_and_hms(2024, 3, 13, 23, 59, 0)
        .single()
        .expect("valid instant");
    let window = trailing_window_at(Granularity::Day, 2, &now);
    assert_eq!(window.start, date(2024, 3, 12));
    assert_eq!(window.end, date(2024, 3, 13));
    assert!(window.contains(date(2024, 3, 12)));
    assert!(!window.contains(date(2024, 3, 14)));
}
