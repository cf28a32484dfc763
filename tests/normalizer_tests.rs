use period_series::core::{Granularity, RawPeriodRow, RawRevenue, normalize_period, normalize_rows};

#[test]
fn canonical_keys_normalize_to_themselves() {
    let cases = [
        (Granularity::Day, "2024-02-13"),
        (Granularity::Week, "2024-07"),
        (Granularity::Week, "2025-01"),
        (Granularity::Month, "2024-03"),
        (Granularity::Quarter, "2024-Q1"),
    ];
    for (granularity, key) in cases {
        assert_eq!(normalize_period(key, granularity), key);
    }
}

#[test]
fn month_takes_first_seven_characters() {
    assert_eq!(
        normalize_period("2024-03-15T00:00:00Z", Granularity::Month),
        "2024-03"
    );
    assert_eq!(normalize_period("2024-03-01", Granularity::Month), "2024-03");
    assert_eq!(normalize_period("March 2024", Granularity::Month), "March 2");
    assert_eq!(normalize_period(" 2024-03 ", Granularity::Month), "2024-03");
}

#[test]
fn day_accepts_general_date_encodings() {
    assert_eq!(
        normalize_period("2024-03-01T12:00:00Z", Granularity::Day),
        "2024-03-01"
    );
    assert_eq!(normalize_period("2024/03/01", Granularity::Day), "2024-03-01");
    assert_eq!(
        normalize_period("2024-03-01 08:30:00", Granularity::Day),
        "2024-03-01"
    );
    assert_eq!(normalize_period("garbage", Granularity::Day), "garbage");
}

#[test]
fn week_reduces_to_year_month_run() {
    assert_eq!(normalize_period("2024-W07", Granularity::Week), "2024-07");
    assert_eq!(
        normalize_period("week starting 2024-02-12", Granularity::Week),
        "2024-02"
    );
    assert_eq!(normalize_period("W7", Granularity::Week), "W7");
}

#[test]
fn quarter_accepts_prefixed_and_bare_numbers() {
    assert_eq!(normalize_period("2024-q3", Granularity::Quarter), "2024-Q3");
    assert_eq!(normalize_period("2024-2", Granularity::Quarter), "2024-Q2");
    assert_eq!(normalize_period("2024-Q5", Granularity::Quarter), "2024-Q5");
    assert_eq!(normalize_period("Q1 2024", Granularity::Quarter), "Q1 2024");
}

#[test]
fn unmatched_input_is_returned_unchanged() {
    let raw = "  ??  ";
    assert_eq!(normalize_period(raw, Granularity::Day), raw);
    assert_eq!(normalize_period(raw, Granularity::Week), raw);
    assert_eq!(normalize_period(raw, Granularity::Quarter), raw);
}

#[test]
fn rows_keep_order_and_coerce_revenue() {
    let rows = vec![
        RawPeriodRow::new("2024-Q1", 10.0),
        RawPeriodRow::new("2024-2", "12.5"),
        RawPeriodRow::new("2024-3", "n/a"),
        RawPeriodRow {
            period: "2024-q4".to_owned(),
            revenue: RawRevenue::Missing,
        },
    ];

    let normalized = normalize_rows(&rows, Granularity::Quarter);
    let keys: Vec<&str> = normalized.iter().map(|row| row.key.as_str()).collect();
    let revenues: Vec<f64> = normalized.iter().map(|row| row.revenue).collect();

    assert_eq!(keys, vec!["2024-Q1", "2024-Q2", "2024-Q3", "2024-Q4"]);
    assert_eq!(revenues, vec![10.0, 12.5, 0.0, 0.0]);
}
