use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use futures_util::future::join_all;
use http::header::HeaderMap;
use reqwest::{Client, Method, Request, Url};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use super::cancel::CancelToken;
use super::client::{build_client, resolve_method, template_headers};
use super::report::{Report, Sample};
use super::work::{LoadSettings, Work};
use super::Engine;
use crate::error::{AppError, AppResult, EngineError};

/// Engine that issues requests with one shared reqwest [`Client`].
pub struct HttpEngine {
    work: Work,
    template: Arc<RequestTemplate>,
}

struct RequestTemplate {
    client: Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RequestTemplate {
    fn build(&self) -> Result<Request, EngineError> {
        self.client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers.clone())
            .body(self.body.clone())
            .build()
            .map_err(|err| EngineError::RequestFailed { source: err })
    }

    async fn send(&self) -> Result<u16, String> {
        let request = self.build().map_err(|err| err.to_string())?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| EngineError::RequestFailed { source: err }.to_string())?;
        let status = response.status().as_u16();
        response
            .bytes()
            .await
            .map_err(|err| EngineError::ReadBody { source: err }.to_string())?;
        Ok(status)
    }
}

impl HttpEngine {
    /// Builds the HTTP client and request template for `work`.
    ///
    /// # Errors
    ///
    /// Returns an error when the method, host override or proxy is rejected
    /// by the transport, or the client cannot be built.
    pub fn new(work: Work) -> AppResult<Self> {
        let template = RequestTemplate {
            client: build_client(&work)?,
            method: resolve_method(&work)?,
            url: work.request.url.clone(),
            headers: template_headers(&work)?,
            body: work.request.body.clone(),
        };
        Ok(Self {
            work,
            template: Arc::new(template),
        })
    }
}

#[async_trait]
impl Engine for HttpEngine {
    async fn run_simple(&self) -> AppResult<String> {
        let request = self.template.build()?;
        debug!(method = %request.method(), url = %request.url(), "Sending single request");
        let response = self
            .template
            .client
            .execute(request)
            .await
            .map_err(|err| AppError::engine(EngineError::RequestFailed { source: err }))?;

        let mut out = format!("{:?} {}\n", response.version(), response.status());
        for (name, value) in response.headers() {
            drop(writeln!(
                out,
                "{}: {}",
                name,
                String::from_utf8_lossy(value.as_bytes())
            ));
        }
        let body = response
            .text()
            .await
            .map_err(|err| AppError::engine(EngineError::ReadBody { source: err }))?;
        out.push('\n');
        out.push_str(&body);
        Ok(out)
    }

    async fn run(&self, load: LoadSettings, cancel: CancelToken) -> AppResult<String> {
        let start = Instant::now();
        let pace = load.pace();
        let (sample_tx, mut sample_rx) = mpsc::unbounded_channel::<Sample>();

        let workers: Vec<_> = load
            .worker_budgets()
            .into_iter()
            .map(|budget| {
                let worker = Worker {
                    template: Arc::clone(&self.template),
                    cancel: cancel.clone(),
                    samples: sample_tx.clone(),
                    start,
                    pace,
                };
                tokio::spawn(worker.run(budget))
            })
            .collect();
        drop(sample_tx);
        info!(
            workers = workers.len(),
            requests = load.requests,
            "Load test started"
        );

        let mut report = Report::new(self.work.output);
        while let Some(sample) = sample_rx.recv().await {
            report.record(sample);
        }
        for joined in join_all(workers).await {
            joined.map_err(|err| AppError::engine(EngineError::WorkerJoin { source: err }))?;
        }

        let elapsed = start.elapsed();
        info!(
            responses = report.responses(),
            errors = report.error_count(),
            cancelled = cancel.is_cancelled(),
            "Load test finished"
        );
        Ok(report.render(elapsed))
    }
}

struct Worker {
    template: Arc<RequestTemplate>,
    cancel: CancelToken,
    samples: mpsc::UnboundedSender<Sample>,
    start: Instant,
    pace: Option<std::time::Duration>,
}

impl Worker {
    async fn run(self, budget: u64) {
        let mut ticker = self.pace.map(|period| {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });

        for _ in 0..budget {
            if self.cancel.is_cancelled() {
                break;
            }
            if let Some(ticker) = ticker.as_mut() {
                tokio::select! {
                    () = self.cancel.cancelled() => break,
                    _ = ticker.tick() => {}
                }
            }

            let sent_at = Instant::now();
            let outcome = tokio::select! {
                biased;
                () = self.cancel.cancelled() => break,
                outcome = self.template.send() => outcome,
            };
            let sample = Sample {
                offset: sent_at.saturating_duration_since(self.start),
                latency: sent_at.elapsed(),
                outcome,
            };
            if self.samples.send(sample).is_err() {
                break;
            }
        }
    }
}
