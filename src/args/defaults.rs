use std::num::NonZeroUsize;

/// Identifier appended to (or used as) the User-Agent of every request.
pub const TOOL_USER_AGENT: &str = concat!("hey/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_REQUESTS: i64 = 200;
pub(crate) const DEFAULT_CONCURRENCY: i64 = 50;
pub(crate) const DEFAULT_METHOD: &str = "GET";
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "text/html";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Request count used when a duration, not a count, bounds the run.
pub const UNBOUNDED_REQUESTS: u64 = 2_147_483_647;

/// Worker threads for the async runtime when `--cpus` is not given.
#[must_use]
pub fn default_cpus() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
