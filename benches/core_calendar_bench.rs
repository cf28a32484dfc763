use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use period_series::core::{
    Granularity, RawPeriodRow, generate_period_keys, normalize_rows, trailing_window,
};
use period_series::{SeriesRequest, build_series};
use std::hint::black_box;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date")
}

fn bench_week_key_generation_520(c: &mut Criterion) {
    let window = trailing_window(Granularity::Week, 520, today());

    c.bench_function("week_key_generation_520", |b| {
        b.iter(|| {
            let _ = generate_period_keys(black_box(window), black_box(Granularity::Week));
        })
    });
}

fn bench_day_normalization_10k(c: &mut Criterion) {
    let rows: Vec<RawPeriodRow> = (0..10_000)
        .map(|i| {
            let day = i % 28 + 1;
            let month = i % 12 + 1;
            RawPeriodRow::new(format!("2024-{month:02}-{day:02}T12:00:00Z"), f64::from(i))
        })
        .collect();

    c.bench_function("day_normalization_10k", |b| {
        b.iter(|| {
            let _ = normalize_rows(black_box(&rows), black_box(Granularity::Day));
        })
    });
}

fn bench_monthly_series_2k_rows(c: &mut Criterion) {
    let rows: Vec<RawPeriodRow> = (0..2_000)
        .map(|i| {
            let year = 2020 + i % 5;
            let month = i % 12 + 1;
            RawPeriodRow::new(format!("{year}-{month:02}"), format!("{}.50", i * 3))
        })
        .collect();
    let request = SeriesRequest::new(Granularity::Month, 36);

    c.bench_function("monthly_series_2k_rows", |b| {
        b.iter(|| {
            let _ = build_series(black_box(request), black_box(&rows), black_box(today()));
        })
    });
}

criterion_group!(
    benches,
    bench_week_key_generation_520,
    bench_day_normalization_10k,
    bench_monthly_series_2k_rows
);
criterion_main!(benches);
