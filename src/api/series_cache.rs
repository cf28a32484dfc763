use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::NaiveDate;
use ordered_float::OrderedFloat;

use crate::core::{RawPeriodRow, TimeSeriesPoint};

use super::{SeriesRequest, build_series};

/// Runtime metrics exposed by [`SeriesCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SeriesCacheKey {
    request: SeriesRequest,
    today: NaiveDate,
    rows_fingerprint: u64,
}

/// Caller-owned memo of built series.
///
/// Entries are keyed by the request, the reference date and a fingerprint of
/// the raw rows. The engine itself keeps no state between calls.
#[derive(Debug, Default)]
pub struct SeriesCache {
    entries: HashMap<SeriesCacheKey, Vec<TimeSeriesPoint>>,
    hits: u64,
    misses: u64,
}

impl SeriesCache {
    const MAX_ENTRIES: usize = 256;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached series or builds and stores it.
    pub fn get_or_build(
        &mut self,
        request: SeriesRequest,
        rows: &[RawPeriodRow],
        today: NaiveDate,
    ) -> Vec<TimeSeriesPoint> {
        let key = SeriesCacheKey {
            request,
            today,
            rows_fingerprint: rows_fingerprint(rows),
        };
        if let Some(points) = self.entries.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return points.clone();
        }

        self.misses = self.misses.saturating_add(1);
        let points = build_series(request, rows, today);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, points.clone());
        points
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn stats(&self) -> SeriesCacheStats {
        SeriesCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

/// Order-sensitive hash of row periods and coerced revenues.
///
/// Row order matters because duplicate periods resolve last-wins. Rows whose
/// revenue text differs but coerces to the same number hash equally.
#[must_use]
pub fn rows_fingerprint(rows: &[RawPeriodRow]) -> u64 {
    let mut hasher = DefaultHasher::new();
    rows.len().hash(&mut hasher);
    for row in rows {
        row.period.hash(&mut hasher);
        OrderedFloat(row.revenue.to_f64()).hash(&mut hasher);
    }
    hasher.finish()
}
