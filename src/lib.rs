//! period-series: calendar bucketing and gap-filled revenue series.
//!
//! Turns a trailing reporting window plus a sparse set of `{period, revenue}`
//! rows into a dense, chronologically ordered series ready for charting.
//! Every operation is a pure, synchronous function of its inputs.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{SeriesConfig, SeriesRequest, build_series, build_series_at};
pub use error::{SeriesError, SeriesResult};
