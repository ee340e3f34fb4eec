use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Duration;

use crate::args::OutputMode;

/// Per-request results kept for CSV output; later results are only counted.
const MAX_RECORDED_RESULTS: usize = 1_000_000;

#[derive(Debug)]
pub(super) struct Sample {
    /// Time from run start to the moment the request was sent.
    pub offset: Duration,
    pub latency: Duration,
    pub outcome: Result<u16, String>,
}

#[derive(Debug, Default)]
pub(super) struct Report {
    responses: u64,
    fastest: Option<Duration>,
    slowest: Option<Duration>,
    latency_total: Duration,
    status_codes: BTreeMap<u16, u64>,
    errors: BTreeMap<String, u64>,
    samples: Vec<Sample>,
    keep_samples: bool,
}

impl Report {
    pub(super) fn new(output: Option<OutputMode>) -> Self {
        Self {
            keep_samples: matches!(output, Some(OutputMode::Csv)),
            ..Self::default()
        }
    }

    pub(super) fn record(&mut self, sample: Sample) {
        match &sample.outcome {
            Ok(status) => {
                self.responses = self.responses.saturating_add(1);
                self.latency_total = self.latency_total.saturating_add(sample.latency);
                self.fastest = Some(
                    self.fastest
                        .map_or(sample.latency, |fastest| fastest.min(sample.latency)),
                );
                self.slowest = Some(
                    self.slowest
                        .map_or(sample.latency, |slowest| slowest.max(sample.latency)),
                );
                let count = self.status_codes.entry(*status).or_insert(0);
                *count = count.saturating_add(1);
            }
            Err(message) => {
                let count = self.errors.entry(message.clone()).or_insert(0);
                *count = count.saturating_add(1);
            }
        }
        if self.keep_samples && self.samples.len() < MAX_RECORDED_RESULTS {
            self.samples.push(sample);
        }
    }

    pub(super) fn render(&self, elapsed: Duration) -> String {
        if self.keep_samples {
            self.render_csv()
        } else {
            self.render_summary(elapsed)
        }
    }

    fn render_csv(&self) -> String {
        let mut out = String::from("response-time,status-code,offset\n");
        for sample in &self.samples {
            let status = sample.outcome.as_ref().map_or(0, |status| *status);
            drop(writeln!(
                out,
                "{:.4},{},{:.4}",
                sample.latency.as_secs_f64(),
                status,
                sample.offset.as_secs_f64()
            ));
        }
        out
    }

    fn render_summary(&self, elapsed: Duration) -> String {
        let mut out = String::from("\nSummary:\n");
        drop(writeln!(out, "  Total:\t{:.4} secs", elapsed.as_secs_f64()));
        if let (Some(slowest), Some(fastest)) = (self.slowest, self.fastest) {
            drop(writeln!(out, "  Slowest:\t{:.4} secs", slowest.as_secs_f64()));
            drop(writeln!(out, "  Fastest:\t{:.4} secs", fastest.as_secs_f64()));
            drop(writeln!(
                out,
                "  Average:\t{:.4} secs",
                self.average_latency().as_secs_f64()
            ));
        }
        let rps_x100 = requests_per_sec_x100(self.responses, elapsed);
        drop(writeln!(
            out,
            "  Requests/sec:\t{}.{:02}",
            rps_x100 / 100,
            rps_x100 % 100
        ));

        if !self.status_codes.is_empty() {
            out.push_str("\nStatus code distribution:\n");
            for (status, count) in &self.status_codes {
                drop(writeln!(out, "  [{}]\t{} responses", status, count));
            }
        }

        if !self.errors.is_empty() {
            out.push_str("\nError distribution:\n");
            for (message, count) in &self.errors {
                drop(writeln!(out, "  [{}]\t{}", count, message));
            }
        }
        out
    }

    fn average_latency(&self) -> Duration {
        let nanos = self
            .latency_total
            .as_nanos()
            .checked_div(u128::from(self.responses))
            .unwrap_or(0);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    pub(super) const fn responses(&self) -> u64 {
        self.responses
    }

    pub(super) fn error_count(&self) -> u64 {
        self.errors.values().copied().fold(0, u64::saturating_add)
    }
}

fn requests_per_sec_x100(responses: u64, elapsed: Duration) -> u64 {
    let scaled = u128::from(responses)
        .saturating_mul(100_000)
        .checked_div(elapsed.as_millis().max(1))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
