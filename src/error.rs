use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("invalid period key for {granularity}: {key:?}")]
    InvalidPeriodKey { granularity: String, key: String },

    #[error("unknown granularity: {0:?}")]
    UnknownGranularity(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
