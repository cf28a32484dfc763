use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::calendar::{
    add_months_clamped, iso_week_of, monday_of_iso_week, quarter_of_month, start_of_iso_week,
    start_of_month, start_of_quarter,
};
use crate::core::primitives::{is_year_month, parse_digits};
use crate::core::{CalendarWindow, Granularity};
use crate::error::{SeriesError, SeriesResult};

/// Canonical identifier of one calendar bucket.
///
/// `Display` renders the canonical key text (`YYYY-MM-DD`, `YYYY-WW`,
/// `YYYY-MM`, `YYYY-Qn`). Ordering is chronological between keys of the same
/// granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeriodKey {
    Day(NaiveDate),
    /// ISO week; `iso_year` is the week-numbering year, not the calendar year.
    Week { iso_year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Quarter { year: i32, quarter: u32 },
}

impl PeriodKey {
    /// Key of the bucket that contains `date`.
    #[must_use]
    pub fn containing(date: NaiveDate, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Day => Self::Day(date),
            Granularity::Week => {
                let (iso_year, week) = iso_week_of(date);
                Self::Week { iso_year, week }
            }
            Granularity::Month => Self::Month {
                year: date.year(),
                month: date.month(),
            },
            Granularity::Quarter => Self::Quarter {
                year: date.year(),
                quarter: quarter_of_month(date.month()),
            },
        }
    }

    #[must_use]
    pub fn granularity(self) -> Granularity {
        match self {
            Self::Day(_) => Granularity::Day,
            Self::Week { .. } => Granularity::Week,
            Self::Month { .. } => Granularity::Month,
            Self::Quarter { .. } => Granularity::Quarter,
        }
    }

    /// First calendar day of the bucket.
    #[must_use]
    pub fn start_date(self) -> Option<NaiveDate> {
        match self {
            Self::Day(date) => Some(date),
            Self::Week { iso_year, week } => monday_of_iso_week(iso_year, week),
            Self::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1),
            Self::Quarter { year, quarter } => {
                NaiveDate::from_ymd_opt(year, (quarter.checked_sub(1)?) * 3 + 1, 1)
            }
        }
    }

    /// Strictly parses canonical key text for `granularity`.
    pub fn parse(granularity: Granularity, text: &str) -> SeriesResult<Self> {
        let invalid = || SeriesError::InvalidPeriodKey {
            granularity: granularity.to_string(),
            key: text.to_owned(),
        };

        match granularity {
            Granularity::Day => {
                if text.len() != 10 {
                    return Err(invalid());
                }
                let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| invalid())?;
                let key = Self::Day(date);
                // chrono tolerates unpadded fields; canonical text does not.
                if key.to_string() != text {
                    return Err(invalid());
                }
                Ok(key)
            }
            Granularity::Week => {
                let (iso_year, week) = split_year_suffix(text, "").ok_or_else(invalid)?;
                monday_of_iso_week(iso_year, week).ok_or_else(invalid)?;
                Ok(Self::Week { iso_year, week })
            }
            Granularity::Month => {
                if !is_year_month(text.as_bytes()) {
                    return Err(invalid());
                }
                let (year, month) = split_year_suffix(text, "").ok_or_else(invalid)?;
                if !(1..=12).contains(&month) {
                    return Err(invalid());
                }
                Ok(Self::Month { year, month })
            }
            Granularity::Quarter => {
                let (year, quarter) = split_year_suffix(text, "Q").ok_or_else(invalid)?;
                if !(1..=4).contains(&quarter) {
                    return Err(invalid());
                }
                Ok(Self::Quarter { year, quarter })
            }
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Week { iso_year, week } => write!(f, "{iso_year:04}-{week:02}"),
            Self::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Quarter { year, quarter } => write!(f, "{year:04}-Q{quarter}"),
        }
    }
}

/// Splits `YYYY-<marker><digits>` into its two numbers.
///
/// Week and month suffixes are exactly two digits; quarter suffixes one.
fn split_year_suffix(text: &str, marker: &str) -> Option<(i32, u32)> {
    let (year, rest) = text.split_once('-')?;
    if year.len() != 4 {
        return None;
    }
    let digits = rest.strip_prefix(marker)?;
    let expected_len = if marker.is_empty() { 2 } else { 1 };
    if digits.len() != expected_len {
        return None;
    }
    Some((parse_digits(year)?, parse_digits(digits)?))
}

/// Enumerates every bucket key between `window.start` and `window.end` inclusive.
///
/// The first bucket is the one containing `window.start` (weeks snap to
/// Monday, months to day 1, quarters to their first month), and the last is the
/// one containing `window.end`. The output is strictly ascending and free of
/// duplicates.
#[must_use]
pub fn generate_period_keys(window: CalendarWindow, granularity: Granularity) -> Vec<PeriodKey> {
    if window.is_empty() {
        return Vec::new();
    }

    let mut keys = Vec::new();
    match granularity {
        Granularity::Day => {
            let mut cursor = Some(window.start);
            while let Some(day) = cursor.filter(|day| *day <= window.end) {
                keys.push(PeriodKey::Day(day));
                cursor = day.succ_opt();
            }
        }
        Granularity::Week => {
            let last = start_of_iso_week(window.end);
            let mut cursor = Some(start_of_iso_week(window.start));
            while let Some(monday) = cursor.filter(|monday| *monday <= last) {
                keys.push(PeriodKey::containing(monday, Granularity::Week));
                cursor = monday.checked_add_days(chrono::Days::new(7));
            }
        }
        Granularity::Month => {
            step_months(
                start_of_month(window.start),
                start_of_month(window.end),
                1,
                Granularity::Month,
                &mut keys,
            );
        }
        Granularity::Quarter => {
            step_months(
                start_of_quarter(window.start),
                start_of_quarter(window.end),
                3,
                Granularity::Quarter,
                &mut keys,
            );
        }
    }

    trace!(
        granularity = %granularity,
        start = %window.start,
        end = %window.end,
        count = keys.len(),
        "generated period keys"
    );
    keys
}

fn step_months(
    first: NaiveDate,
    last: NaiveDate,
    months: u32,
    granularity: Granularity,
    keys: &mut Vec<PeriodKey>,
) {
    let mut cursor = first;
    while cursor <= last {
        keys.push(PeriodKey::containing(cursor, granularity));
        let next = add_months_clamped(cursor, months);
        if next <= cursor {
            break;
        }
        cursor = next;
    }
}
