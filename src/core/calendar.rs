//! Calendar arithmetic shared by the window and key generator.
//!
//! All helpers operate on `NaiveDate` and saturate instead of panicking when a
//! step would leave chrono's representable range.

use chrono::{Datelike, Days, Months, NaiveDate};

/// ISO-8601 week-numbering year and week (1..=53) of `date`.
///
/// The date is moved to the Thursday of its Monday..Sunday week; that
/// Thursday's calendar year is the ISO year and `ceil(ordinal / 7)` the week.
#[must_use]
pub fn iso_week_of(date: NaiveDate) -> (i32, u32) {
    let from_monday = date.weekday().num_days_from_monday();
    let thursday = if from_monday <= 3 {
        date.checked_add_days(Days::new(u64::from(3 - from_monday)))
    } else {
        date.checked_sub_days(Days::new(u64::from(from_monday - 3)))
    };
    match thursday {
        Some(thursday) => (thursday.year(), thursday.ordinal().div_ceil(7)),
        None => {
            let iso = date.iso_week();
            (iso.year(), iso.week())
        }
    }
}

/// Monday starting the ISO week that contains `date`.
#[must_use]
pub fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Monday of ISO week `week` in ISO year `iso_year`, if that week exists.
#[must_use]
pub fn monday_of_iso_week(iso_year: i32, week: u32) -> Option<NaiveDate> {
    NaiveDate::from_isoywd_opt(iso_year, week, chrono::Weekday::Mon)
}

#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Quarter number (1..=4) of a calendar month (1..=12).
#[must_use]
pub fn quarter_of_month(month: u32) -> u32 {
    (month.clamp(1, 12) - 1) / 3 + 1
}

#[must_use]
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let first_month = (quarter_of_month(date.month()) - 1) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date)
}

/// Adds whole months, clamping the day to the target month's length.
#[must_use]
pub fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Subtracts whole months, clamping the day to the target month's length.
///
/// `Jan 31 - 1 month` is `Dec 31`; `Mar 31 - 1 month` is the last day of February.
#[must_use]
pub fn sub_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

#[must_use]
pub fn sub_days_saturating(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}
