use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SeriesError, SeriesResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> SeriesResult<f64> {
    value.to_f64().ok_or_else(|| {
        SeriesError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses a numeric revenue string, coercing failures and non-finite values to `0.0`.
#[must_use]
pub fn coerce_revenue_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Returns `true` when `bytes` is exactly `YYYY-MM` with ASCII digits.
pub(crate) fn is_year_month(bytes: &[u8]) -> bool {
    bytes.len() == 7
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// Parses an all-digit ASCII slice.
pub(crate) fn parse_digits<T: std::str::FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
