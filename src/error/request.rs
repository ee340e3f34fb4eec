use std::path::PathBuf;

use thiserror::Error;

use super::ErrorKind;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Cannot parse header '{value}'. Expected 'Name: value'.")]
    MalformedHeader { value: String },
    #[error("Invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    #[error("{}: {source}", path.display())]
    ReadBodyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RequestError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            RequestError::MalformedHeader { .. }
            | RequestError::InvalidHeaderValue { .. } => ErrorKind::Parse,
            RequestError::ReadBodyFile { .. } => ErrorKind::Io,
        }
    }
}
