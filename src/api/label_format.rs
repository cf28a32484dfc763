use serde::{Deserialize, Serialize};

use crate::core::{Granularity, PeriodKey};

/// Locale used for built-in period labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LabelLocale {
    #[default]
    PtBr,
    EsEs,
    EnUs,
}

impl LabelLocale {
    #[must_use]
    pub fn month_abbreviation(self, month: u32) -> Option<&'static str> {
        let names = match self {
            Self::PtBr => [
                "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
            ],
            Self::EsEs => [
                "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
            ],
            Self::EnUs => [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
        };
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        names.get(index).copied()
    }

    #[must_use]
    pub fn week_prefix(self) -> &'static str {
        match self {
            Self::PtBr | Self::EsEs => "Sem",
            Self::EnUs => "Wk",
        }
    }
}

/// Display label for a typed bucket key.
#[must_use]
pub fn format_key_label(key: PeriodKey, locale: LabelLocale) -> String {
    match key {
        PeriodKey::Day(_) => key.to_string(),
        PeriodKey::Week { iso_year, week } => {
            format!("{} {week:02}/{iso_year:04}", locale.week_prefix())
        }
        PeriodKey::Month { month, .. } => locale
            .month_abbreviation(month)
            .map_or_else(|| key.to_string(), str::to_owned),
        PeriodKey::Quarter { year, quarter } => format!("Q{quarter}/{year:04}"),
    }
}

/// Display label for canonical key text.
///
/// Month keys drop the year (`2024-03` -> `Mar`), weeks render as
/// `Sem 07/2024`, quarters as `Q1/2024`, and day keys stay as they are.
/// Text that is not a canonical key for `granularity` passes through.
#[must_use]
pub fn format_period_label(key: &str, granularity: Granularity, locale: LabelLocale) -> String {
    if granularity == Granularity::Day {
        return key.to_owned();
    }
    match PeriodKey::parse(granularity, key) {
        Ok(parsed) => format_key_label(parsed, locale),
        Err(_) => key.to_owned(),
    }
}
