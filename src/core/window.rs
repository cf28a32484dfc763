use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::core::Granularity;
use crate::core::calendar::{sub_days_saturating, sub_months_clamped};

/// Inclusive calendar range `[start, end]`.
///
/// A window with `start > end` is empty and produces no buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarWindow {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Empty window anchored at `end`.
    ///
    /// At `NaiveDate::MAX` there is no following day, so the end moves back one
    /// day instead.
    #[must_use]
    pub fn empty_at(end: NaiveDate) -> Self {
        match end.succ_opt() {
            Some(start) => Self { start, end },
            None => Self {
                start: end,
                end: sub_days_saturating(end, 1),
            },
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Subtracts `units` whole units of `granularity` from `date`.
///
/// Month and quarter steps use clamped calendar arithmetic, so the result
/// never rolls into the following month.
#[must_use]
pub fn subtract_units(date: NaiveDate, granularity: Granularity, units: u32) -> NaiveDate {
    match granularity {
        Granularity::Day => sub_days_saturating(date, u64::from(units)),
        Granularity::Week => sub_days_saturating(date, u64::from(units) * 7),
        Granularity::Month => sub_months_clamped(date, units),
        Granularity::Quarter => sub_months_clamped(date, units.saturating_mul(3)),
    }
}

/// Trailing window ending at `today` that spans exactly `bucket_count` buckets.
///
/// The start lies `bucket_count - 1` units before `today`, so the bucket
/// containing `today` is the last one. Non-positive counts yield an empty
/// window.
#[must_use]
pub fn trailing_window(
    granularity: Granularity,
    bucket_count: i64,
    today: NaiveDate,
) -> CalendarWindow {
    if bucket_count <= 0 {
        return CalendarWindow::empty_at(today);
    }
    let units = u32::try_from(bucket_count - 1).unwrap_or(u32::MAX);
    CalendarWindow::new(subtract_units(today, granularity, units), today)
}

/// Same as [`trailing_window`], reading the calendar date of `now` in its own zone.
#[must_use]
pub fn trailing_window_at<Tz: TimeZone>(
    granularity: Granularity,
    bucket_count: i64,
    now: &DateTime<Tz>,
) -> CalendarWindow {
    trailing_window(granularity, bucket_count, now.date_naive())
}
