use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Csv,
}

impl OutputMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputMode::Csv => "csv",
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputMode::Csv),
            _ => Err(ValidationError::UnsupportedOutputFormat {
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveUsize::try_from(value)
    }
}

/// Load parameters that passed validation.
///
/// Fields are only writable inside `args`, and [`crate::args::validate`] is
/// the only constructor, so holding a `Params` means the target, auth, proxy
/// and count/concurrency relationships are all known to be valid.
#[derive(Debug, Clone)]
pub struct Params {
    pub(super) target: Url,
    pub(super) method: String,
    pub(super) content_type: String,
    pub(super) headers: Vec<String>,
    pub(super) accept: Option<String>,
    pub(super) body: Option<String>,
    pub(super) body_file: Option<PathBuf>,
    pub(super) auth: Option<BasicAuth>,
    pub(super) host: Option<String>,
    pub(super) proxy: Option<Url>,
    pub(super) output: Option<OutputMode>,
    pub(super) requests: u64,
    pub(super) concurrency: u64,
    pub(super) qps: f64,
    /// Zero disables the duration limit.
    pub(super) duration: Duration,
    /// Zero disables the per-request timeout.
    pub(super) timeout: Duration,
    pub(super) http2: bool,
    pub(super) disable_compression: bool,
    pub(super) disable_keepalive: bool,
    pub(super) disable_redirects: bool,
}

impl Params {
    #[must_use]
    pub const fn is_single_shot(&self) -> bool {
        self.requests == 1
    }

    #[must_use]
    pub const fn target(&self) -> &Url {
        &self.target
    }

    /// The method exactly as given; the request builder uppercases it.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw `-H` lines in command-line order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub fn body_file(&self) -> Option<&Path> {
        self.body_file.as_deref()
    }

    #[must_use]
    pub const fn auth(&self) -> Option<&BasicAuth> {
        self.auth.as_ref()
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[must_use]
    pub const fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }

    #[must_use]
    pub const fn output(&self) -> Option<OutputMode> {
        self.output
    }

    /// Resolved request count; [`crate::args::UNBOUNDED_REQUESTS`] when a
    /// duration bounds the run.
    #[must_use]
    pub const fn requests(&self) -> u64 {
        self.requests
    }

    #[must_use]
    pub const fn concurrency(&self) -> u64 {
        self.concurrency
    }

    #[must_use]
    pub const fn qps(&self) -> f64 {
        self.qps
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn http2(&self) -> bool {
        self.http2
    }

    #[must_use]
    pub const fn disable_compression(&self) -> bool {
        self.disable_compression
    }

    #[must_use]
    pub const fn disable_keepalive(&self) -> bool {
        self.disable_keepalive
    }

    #[must_use]
    pub const fn disable_redirects(&self) -> bool {
        self.disable_redirects
    }
}
