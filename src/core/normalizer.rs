//! Lenient mapping of backend period strings onto canonical key text.
//!
//! Normalization never fails. Input that matches no known encoding is
//! returned unchanged and later misses the merge join, which drops the row.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
#[cfg(feature = "parallel-normalize")]
use rayon::prelude::*;

use crate::core::primitives::{is_year_month, parse_digits};
use crate::core::{Granularity, RawPeriodRow};

/// Period text paired with its coerced revenue, ready for merging.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub key: String,
    pub revenue: f64,
}

const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Maps `raw` onto the canonical key space of `granularity`.
///
/// Already-canonical keys come back unchanged.
#[must_use]
pub fn normalize_period(raw: &str, granularity: Granularity) -> String {
    let trimmed = raw.trim();
    let normalized = match granularity {
        Granularity::Day => normalize_day(trimmed),
        Granularity::Week => normalize_week(trimmed),
        Granularity::Month => Some(normalize_month(trimmed)),
        Granularity::Quarter => normalize_quarter(trimmed),
    };
    normalized.unwrap_or_else(|| raw.to_owned())
}

/// Normalizes every row's period and coerces its revenue.
///
/// Output order matches input order so last-wins merging stays deterministic.
#[must_use]
pub fn normalize_rows(rows: &[RawPeriodRow], granularity: Granularity) -> Vec<NormalizedRow> {
    let normalize = |row: &RawPeriodRow| NormalizedRow {
        key: normalize_period(&row.period, granularity),
        revenue: row.revenue.to_f64(),
    };

    #[cfg(feature = "parallel-normalize")]
    {
        rows.par_iter().map(normalize).collect()
    }

    #[cfg(not(feature = "parallel-normalize"))]
    {
        rows.iter().map(normalize).collect()
    }
}

/// First seven characters with trailing whitespace dropped.
fn normalize_month(text: &str) -> String {
    let prefix: String = text.chars().take(7).collect();
    prefix.trim_end().to_owned()
}

fn normalize_day(text: &str) -> Option<String> {
    parse_calendar_date(text).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Accepts plain dates, naive date-times, RFC 3339 and RFC 2822.
///
/// Offset-carrying inputs resolve to their UTC calendar date.
fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn normalize_week(text: &str) -> Option<String> {
    if let Some((iso_year, week)) = parse_iso_week_notation(text) {
        return Some(format!("{iso_year:04}-{week:02}"));
    }
    find_year_month(text).map(str::to_owned)
}

/// Parses ISO week notation `YYYY-Www`.
fn parse_iso_week_notation(text: &str) -> Option<(i32, u32)> {
    let (year, rest) = text.split_once('-')?;
    let week = rest.strip_prefix('W').or_else(|| rest.strip_prefix('w'))?;
    if year.len() != 4 || week.len() != 2 {
        return None;
    }
    let week: u32 = parse_digits(week)?;
    if !(1..=53).contains(&week) {
        return None;
    }
    Some((parse_digits(year)?, week))
}

/// First `YYYY-MM` run inside `text`.
fn find_year_month(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() < 7 {
        return None;
    }
    (0..=bytes.len() - 7)
        .find(|&at| is_year_month(&bytes[at..at + 7]))
        // The matched run is pure ASCII, so both ends are char boundaries.
        .map(|at| &text[at..at + 7])
}

fn normalize_quarter(text: &str) -> Option<String> {
    let (year, rest) = text.split_once('-')?;
    let quarter = rest
        .strip_prefix('Q')
        .or_else(|| rest.strip_prefix('q'))
        .unwrap_or(rest);
    if year.len() != 4 || quarter.len() != 1 {
        return None;
    }
    let year: i32 = parse_digits(year)?;
    let quarter: u32 = parse_digits(quarter)?;
    if !(1..=4).contains(&quarter) {
        return None;
    }
    Some(format!("{year:04}-Q{quarter}"))
}
