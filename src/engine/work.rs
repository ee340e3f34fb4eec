use std::time::Duration;

use url::Url;

use crate::args::{OutputMode, Params};
use crate::request::RequestDescriptor;

/// Shortest pacing interval; timers reject a zero period.
const MIN_PACE: Duration = Duration::from_nanos(1);
/// Longest pacing interval; keeps timer deadlines representable.
const MAX_PACE: Duration = Duration::from_secs(31_536_000);

/// Everything an engine needs besides the load shape: the request template
/// and the transport toggles.
#[derive(Debug, Clone)]
pub struct Work {
    pub request: RequestDescriptor,
    /// `None` disables the per-request timeout.
    pub timeout: Option<Duration>,
    pub http2: bool,
    pub disable_compression: bool,
    pub disable_keepalive: bool,
    pub disable_redirects: bool,
    pub proxy: Option<Url>,
    pub output: Option<OutputMode>,
}

impl Work {
    #[must_use]
    pub fn new(request: RequestDescriptor, params: &Params) -> Self {
        Self {
            request,
            timeout: Some(params.timeout()).filter(|timeout| !timeout.is_zero()),
            http2: params.http2(),
            disable_compression: params.disable_compression(),
            disable_keepalive: params.disable_keepalive(),
            disable_redirects: params.disable_redirects(),
            proxy: params.proxy().cloned(),
            output: params.output(),
        }
    }
}

/// Shape of a multi-request run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSettings {
    pub requests: u64,
    pub concurrency: u64,
    /// Per-worker rate cap; values <= 0 mean unlimited.
    pub qps: f64,
}

impl LoadSettings {
    /// Interval between two requests of one worker, if throttled.
    ///
    /// The interval is clamped to `[MIN_PACE, MAX_PACE]`, so very large
    /// rates never produce a zero period and very small ones still throttle.
    #[must_use]
    pub fn pace(&self) -> Option<Duration> {
        if self.qps > 0.0 {
            let period = Duration::try_from_secs_f64(self.qps.recip()).unwrap_or(MAX_PACE);
            Some(period.clamp(MIN_PACE, MAX_PACE))
        } else {
            None
        }
    }

    /// Splits the request budget across workers. The first
    /// `requests % concurrency` workers take one extra request.
    #[must_use]
    pub fn worker_budgets(&self) -> Vec<u64> {
        let workers = self.concurrency.max(1);
        let base = self.requests.checked_div(workers).unwrap_or(0);
        let extra = self.requests.checked_rem(workers).unwrap_or(0);
        (0..workers)
            .map(|index| {
                if index < extra {
                    base.saturating_add(1)
                } else {
                    base
                }
            })
            .collect()
    }
}
