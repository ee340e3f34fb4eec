use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;
use crate::error::ConfigError;

/// Keys mirror the long flag names with `-` replaced by `_`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub requests: Option<i64>,
    pub concurrency: Option<i64>,
    pub qps: Option<f64>,
    pub duration: Option<DurationValue>,
    pub output: Option<String>,
    pub method: Option<String>,
    pub content_type: Option<String>,
    pub headers: Option<Vec<String>>,
    pub timeout: Option<u64>,
    pub accept: Option<String>,
    pub body: Option<String>,
    pub body_file: Option<PathBuf>,
    pub basic_auth: Option<String>,
    pub proxy: Option<String>,
    pub http2: Option<bool>,
    pub host: Option<String>,
    pub disable_compression: Option<bool>,
    pub disable_keepalive: Option<bool>,
    pub disable_redirects: Option<bool>,
    pub cpus: Option<usize>,
}

/// Either whole seconds (`duration = 30`) or a duration string
/// (`duration = "1m30s"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    /// # Errors
    ///
    /// Returns an error when the string form is not a valid duration.
    pub fn to_duration(&self) -> Result<Duration, ConfigError> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => {
                parse_duration_arg(text).map_err(|err| ConfigError::InvalidDuration { source: err })
            }
        }
    }
}
