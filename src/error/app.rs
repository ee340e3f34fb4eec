use thiserror::Error;

use super::{ConfigError, EngineError, RequestError, ValidationError};

/// Coarse classification used to pick the failure report and exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed command-line input.
    Usage,
    /// Semantic conflicts among count, concurrency, duration and output mode.
    Config,
    /// Unreadable input files and other I/O failures.
    Io,
    /// Malformed header lines, auth strings and URLs.
    Parse,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("{source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Request(#[from] RequestError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn engine<E>(error: E) -> Self
    where
        E: Into<EngineError>,
    {
        error.into().into()
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            AppError::Io { .. } | AppError::Join { .. } => ErrorKind::Io,
            AppError::Clap { .. } => ErrorKind::Usage,
            AppError::Validation(err) => err.kind(),
            AppError::Request(err) => err.kind(),
            AppError::Config(_) => ErrorKind::Config,
            AppError::Engine(_) => ErrorKind::Io,
        }
    }

    /// Caller-input errors are reported together with the usage text.
    #[must_use]
    pub const fn shows_usage(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Io)
    }
}
