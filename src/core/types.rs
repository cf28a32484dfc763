use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{coerce_revenue_text, decimal_to_f64};
use crate::error::{SeriesError, SeriesResult};

/// Calendar bucket size of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Granularity {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
}

impl Granularity {
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Quarter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }

    /// Parses a granularity name, falling back to `Month` for anything unknown.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or(Self::Month)
    }

    /// Bucket count used when the caller does not pick one.
    #[must_use]
    pub fn default_bucket_count(self) -> i64 {
        match self {
            Self::Day => 30,
            Self::Week => 12,
            Self::Month => 7,
            Self::Quarter => 4,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = SeriesError;

    fn from_str(value: &str) -> SeriesResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            "quarter" | "quarterly" => Ok(Self::Quarter),
            _ => Err(SeriesError::UnknownGranularity(value.to_owned())),
        }
    }
}

impl From<String> for Granularity {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

/// Revenue as delivered by the metrics source: a number, a numeric string or `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRevenue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawRevenue {
    /// Coerces to a finite number; anything unparseable becomes `0.0`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Number(value) if value.is_finite() => *value,
            Self::Number(_) => 0.0,
            Self::Text(text) => coerce_revenue_text(text),
            Self::Missing => 0.0,
        }
    }
}

impl From<f64> for RawRevenue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawRevenue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawRevenue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row from the metrics source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPeriodRow {
    pub period: String,
    #[serde(default)]
    pub revenue: RawRevenue,
}

impl RawPeriodRow {
    #[must_use]
    pub fn new(period: impl Into<String>, revenue: impl Into<RawRevenue>) -> Self {
        Self {
            period: period.into(),
            revenue: revenue.into(),
        }
    }

    /// Builds a row from an exact decimal amount.
    ///
    /// Amounts outside the `f64` range coerce to `0.0`, like any other
    /// unusable revenue value.
    #[must_use]
    pub fn from_decimal(period: impl Into<String>, revenue: Decimal) -> Self {
        let value = decimal_to_f64(revenue, "revenue").unwrap_or(0.0);
        Self::new(period, value)
    }
}

/// Merged bucket before labels are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint<K> {
    pub key: K,
    pub revenue: f64,
}

/// Final output unit handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub revenue: f64,
}

impl TimeSeriesPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, revenue: f64) -> Self {
        Self {
            label: label.into(),
            revenue,
        }
    }
}
