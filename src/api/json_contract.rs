use serde::{Deserialize, Serialize};

use crate::core::{Granularity, TimeSeriesPoint};
use crate::error::{SeriesError, SeriesResult};

pub const SERIES_JSON_SCHEMA_V1: u32 = 1;

/// Versioned payload handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesJsonContractV1 {
    pub schema_version: u32,
    pub granularity: Granularity,
    pub points: Vec<TimeSeriesPoint>,
}

impl SeriesJsonContractV1 {
    #[must_use]
    pub fn new(granularity: Granularity, points: Vec<TimeSeriesPoint>) -> Self {
        Self {
            schema_version: SERIES_JSON_SCHEMA_V1,
            granularity,
            points,
        }
    }

    pub fn to_json_pretty(&self) -> SeriesResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SeriesError::InvalidData(format!("failed to serialize series contract v1: {e}"))
        })
    }

    /// Accepts the versioned envelope or a bare point array.
    ///
    /// A bare array carries no granularity, so `fallback_granularity` is used.
    pub fn from_json_compat_str(
        input: &str,
        fallback_granularity: Granularity,
    ) -> SeriesResult<Self> {
        if let Ok(points) = serde_json::from_str::<Vec<TimeSeriesPoint>>(input) {
            return Ok(Self::new(fallback_granularity, points));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            SeriesError::InvalidData(format!("failed to parse series json payload: {e}"))
        })?;
        if payload.schema_version != SERIES_JSON_SCHEMA_V1 {
            return Err(SeriesError::InvalidData(format!(
                "unsupported series schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}
