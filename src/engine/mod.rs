//! Contract between the lifecycle coordinator and the dispatch engine, plus
//! the bundled reqwest-backed engine.
mod cancel;
mod client;
mod http;
mod report;
mod work;


use async_trait::async_trait;

use crate::error::AppResult;

pub use cancel::CancelToken;
pub use http::HttpEngine;
pub use work::{LoadSettings, Work};

/// A load-generation engine constructed from one [`Work`].
#[async_trait]
pub trait Engine: Send + Sync {
    /// Sends exactly one request and returns a textual rendering of the
    /// response.
    async fn run_simple(&self) -> AppResult<String>;

    /// Runs the load test until the request budget is spent or `cancel`
    /// fires, and returns the rendered report.
    async fn run(&self, load: LoadSettings, cancel: CancelToken) -> AppResult<String>;
}
