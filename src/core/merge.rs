use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::normalizer::NormalizedRow;
use crate::core::{PeriodKey, SeriesPoint};

/// Bookkeeping for one merge pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    /// Rows whose key landed on a bucket, duplicates included.
    pub matched_rows: usize,
    /// Rows overwritten by a later row with the same key.
    pub overwritten_rows: usize,
    /// Keys that matched no bucket, in first-seen order, with their row counts.
    pub unmatched: IndexMap<String, usize>,
}

impl MergeReport {
    #[must_use]
    pub fn dropped_rows(&self) -> usize {
        self.unmatched.values().sum()
    }
}

/// Joins bucket keys against normalized rows into a dense series.
///
/// One point per key, in key order. A bucket without rows gets exactly `0.0`.
/// When several rows share a key the last one wins; values are never summed.
#[must_use]
pub fn merge_series(keys: &[PeriodKey], rows: &[NormalizedRow]) -> Vec<SeriesPoint<PeriodKey>> {
    merge_series_with_report(keys, rows).0
}

/// Same as [`merge_series`], also reporting which rows were dropped.
#[must_use]
pub fn merge_series_with_report(
    keys: &[PeriodKey],
    rows: &[NormalizedRow],
) -> (Vec<SeriesPoint<PeriodKey>>, MergeReport) {
    let key_texts: Vec<String> = keys.iter().map(ToString::to_string).collect();
    let wanted: HashSet<&str> = key_texts.iter().map(String::as_str).collect();

    let mut report = MergeReport::default();
    let mut lookup: IndexMap<&str, f64> = IndexMap::with_capacity(rows.len());
    for row in rows {
        if wanted.contains(row.key.as_str()) {
            report.matched_rows += 1;
            if lookup.insert(row.key.as_str(), row.revenue).is_some() {
                report.overwritten_rows += 1;
            }
        } else {
            trace!(key = %row.key, revenue = row.revenue, "dropping row outside window");
            *report.unmatched.entry(row.key.clone()).or_insert(0) += 1;
        }
    }

    let points: Vec<SeriesPoint<PeriodKey>> = keys
        .iter()
        .zip(&key_texts)
        .map(|(key, text)| SeriesPoint {
            key: *key,
            revenue: lookup.get(text.as_str()).copied().unwrap_or(0.0),
        })
        .collect();

    debug!(
        buckets = points.len(),
        rows = rows.len(),
        matched = report.matched_rows,
        overwritten = report.overwritten_rows,
        dropped = report.dropped_rows(),
        "merged series"
    );
    (points, report)
}
