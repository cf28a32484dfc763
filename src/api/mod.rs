mod engine_config;
mod json_contract;
mod label_format;
mod series_cache;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Granularity, MergeReport, RawPeriodRow, TimeSeriesPoint, generate_period_keys,
    merge_series_with_report, normalize_rows, trailing_window,
};

pub use engine_config::SeriesConfig;
pub use json_contract::{SERIES_JSON_SCHEMA_V1, SeriesJsonContractV1};
pub use label_format::{LabelLocale, format_key_label, format_period_label};
pub use series_cache::{SeriesCache, SeriesCacheStats, rows_fingerprint};

/// Fully resolved inputs of one series computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub granularity: Granularity,
    pub bucket_count: i64,
    pub locale: LabelLocale,
}

impl SeriesRequest {
    #[must_use]
    pub fn new(granularity: Granularity, bucket_count: i64) -> Self {
        Self {
            granularity,
            bucket_count,
            locale: LabelLocale::default(),
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }
}

impl From<SeriesConfig> for SeriesRequest {
    fn from(config: SeriesConfig) -> Self {
        config.request()
    }
}

/// Builds the dense, labelled series for the window ending at `today`.
///
/// The result has exactly `bucket_count` points in ascending calendar order
/// (none when `bucket_count <= 0`). Rows whose period falls outside the
/// window or matches no known encoding are dropped; empty buckets are `0.0`.
/// The function is pure: equal inputs always give equal output.
#[must_use]
pub fn build_series(
    request: SeriesRequest,
    rows: &[RawPeriodRow],
    today: NaiveDate,
) -> Vec<TimeSeriesPoint> {
    build_series_with_report(request, rows, today).0
}

/// Same as [`build_series`], reading the calendar date of `now` in its own zone.
#[must_use]
pub fn build_series_at<Tz: TimeZone>(
    request: SeriesRequest,
    rows: &[RawPeriodRow],
    now: &DateTime<Tz>,
) -> Vec<TimeSeriesPoint> {
    build_series(request, rows, now.date_naive())
}

/// Same as [`build_series`], also returning the merge bookkeeping.
#[must_use]
pub fn build_series_with_report(
    request: SeriesRequest,
    rows: &[RawPeriodRow],
    today: NaiveDate,
) -> (Vec<TimeSeriesPoint>, MergeReport) {
    let window = trailing_window(request.granularity, request.bucket_count, today);
    let keys = generate_period_keys(window, request.granularity);
    let normalized = normalize_rows(rows, request.granularity);
    let (merged, report) = merge_series_with_report(&keys, &normalized);

    let points: Vec<TimeSeriesPoint> = merged
        .into_iter()
        .map(|point| TimeSeriesPoint {
            label: format_key_label(point.key, request.locale),
            revenue: point.revenue,
        })
        .collect();

    debug!(
        granularity = %request.granularity,
        bucket_count = request.bucket_count,
        points = points.len(),
        dropped = report.dropped_rows(),
        "built revenue series"
    );
    (points, report)
}
