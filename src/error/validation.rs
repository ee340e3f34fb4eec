use thiserror::Error;

use super::ErrorKind;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("A target URL is required.")]
    MissingTarget,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("-a: cannot parse '{value}'. Expected 'username:password'.")]
    InvalidAuthFormat { value: String },
    #[error("-o: unsupported output format '{value}'; only 'csv' is supported.")]
    UnsupportedOutputFormat { value: String },
    #[error("-x: invalid proxy URL '{url}': {source}")]
    InvalidProxyUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("-c must be >= 1 (got {value}).")]
    InvalidConcurrency { value: i64 },
    #[error("-n must be >= 1 (got {value}).")]
    InvalidCount { value: i64 },
    #[error("-n ({requests}) cannot be smaller than -c ({concurrency}).")]
    CountBelowConcurrency { requests: i64, concurrency: i64 },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'. Use forms like 10s, 3m, 1m30s or 500ms.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

impl ValidationError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingTarget
            | ValidationError::DurationEmpty
            | ValidationError::InvalidDurationFormat { .. }
            | ValidationError::InvalidDurationNumber { .. }
            | ValidationError::InvalidDurationUnit { .. }
            | ValidationError::DurationOverflow
            | ValidationError::ValueTooSmall { .. }
            | ValidationError::InvalidNumber { .. } => ErrorKind::Usage,
            ValidationError::InvalidUrl { .. }
            | ValidationError::InvalidAuthFormat { .. }
            | ValidationError::InvalidProxyUrl { .. } => ErrorKind::Parse,
            ValidationError::UnsupportedOutputFormat { .. }
            | ValidationError::InvalidConcurrency { .. }
            | ValidationError::InvalidCount { .. }
            | ValidationError::CountBelowConcurrency { .. }
            | ValidationError::TestExpectation { .. }
            | ValidationError::TestExpectationValue { .. } => ErrorKind::Config,
        }
    }
}
