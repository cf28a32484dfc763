use serde::{Deserialize, Serialize};

use crate::core::Granularity;
use crate::error::{SeriesError, SeriesResult};

use super::{LabelLocale, SeriesRequest};

/// Caller-facing series configuration.
///
/// Serializable so dashboards can persist the selected view. Unknown
/// granularity names load as `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesConfig {
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default)]
    pub bucket_count: Option<i64>,
    #[serde(default)]
    pub locale: LabelLocale,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self::new(Granularity::default())
    }
}

impl SeriesConfig {
    #[must_use]
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            bucket_count: None,
            locale: LabelLocale::default(),
        }
    }

    /// Overrides the granularity's default bucket count.
    #[must_use]
    pub fn with_bucket_count(mut self, bucket_count: i64) -> Self {
        self.bucket_count = Some(bucket_count);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Explicit bucket count, or `day=30, week=12, month=7, quarter=4`.
    #[must_use]
    pub fn effective_bucket_count(self) -> i64 {
        self.bucket_count
            .unwrap_or_else(|| self.granularity.default_bucket_count())
    }

    #[must_use]
    pub fn request(self) -> SeriesRequest {
        SeriesRequest {
            granularity: self.granularity,
            bucket_count: self.effective_bucket_count(),
            locale: self.locale,
        }
    }

    pub fn from_json_str(input: &str) -> SeriesResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SeriesError::InvalidData(format!("failed to parse series config: {e}")))
    }

    pub fn to_json_pretty(self) -> SeriesResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            SeriesError::InvalidData(format!("failed to serialize series config: {e}"))
        })
    }
}
