pub mod calendar;
pub mod merge;
pub mod normalizer;
pub mod period_key;
pub mod primitives;
pub mod types;
pub mod window;

pub use calendar::iso_week_of;
pub use merge::{MergeReport, merge_series, merge_series_with_report};
pub use normalizer::{NormalizedRow, normalize_period, normalize_rows};
pub use period_key::{PeriodKey, generate_period_keys};
pub use types::{Granularity, RawPeriodRow, RawRevenue, SeriesPoint, TimeSeriesPoint};
pub use window::{CalendarWindow, subtract_units, trailing_window, trailing_window_at};
