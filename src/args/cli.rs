use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::defaults::{
    DEFAULT_CONCURRENCY, DEFAULT_CONTENT_TYPE, DEFAULT_METHOD, DEFAULT_REQUESTS,
    DEFAULT_TIMEOUT_SECS,
};
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "hey",
    version,
    about = "HTTP load generator.",
    after_help = "Use -n 1 to print the target's response instead of running a load test."
)]
pub struct HeyArgs {
    /// Number of requests to run. 1 prints the target's response instead of load testing
    #[arg(
        short = 'n',
        long = "requests",
        default_value_t = DEFAULT_REQUESTS,
        allow_negative_numbers = true
    )]
    pub requests: i64,

    /// Number of workers running concurrently; must not exceed -n
    #[arg(
        short = 'c',
        long = "concurrency",
        default_value_t = DEFAULT_CONCURRENCY,
        allow_negative_numbers = true
    )]
    pub concurrency: i64,

    /// Rate limit per worker in queries per second (0 = unlimited)
    #[arg(
        short = 'q',
        long = "qps",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub qps: f64,

    /// Stop after this long, ignoring -n (e.g. 10s, 3m, 1m30s; 0 = disabled)
    #[arg(
        short = 'z',
        long = "duration",
        default_value = "0",
        value_parser = parse_duration_arg
    )]
    pub duration: Duration,

    /// Output mode; only "csv" is supported (default prints a summary)
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// HTTP method
    #[arg(short = 'm', long = "method", default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Content-Type header
    #[arg(short = 'T', long = "content-type", default_value = DEFAULT_CONTENT_TYPE)]
    pub content_type: String,

    /// Custom header in 'Name: value' format (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Per-request timeout in seconds (0 = no timeout)
    #[arg(short = 't', long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Accept header
    #[arg(short = 'A', long = "accept")]
    pub accept: Option<String>,

    /// Request body
    #[arg(short = 'd', long = "body")]
    pub body: Option<String>,

    /// Read the request body from a file; takes precedence over -d
    #[arg(short = 'D', long = "body-file")]
    pub body_file: Option<PathBuf>,

    /// Basic authentication, username:password
    #[arg(short = 'a', long = "basic-auth")]
    pub basic_auth: Option<String>,

    /// HTTP proxy address, e.g. http://host:port
    #[arg(short = 'x', long = "proxy")]
    pub proxy: Option<String>,

    /// Enable HTTP/2
    #[arg(long = "h2")]
    pub http2: bool,

    /// Host header override
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Disable response compression
    #[arg(long = "disable-compression")]
    pub disable_compression: bool,

    /// Disable keep-alive so no connection is reused between requests
    #[arg(long = "disable-keepalive")]
    pub disable_keepalive: bool,

    /// Do not follow HTTP redirects
    #[arg(long = "disable-redirects")]
    pub disable_redirects: bool,

    /// Worker threads for the async runtime (defaults to the available cores)
    #[arg(long = "cpus", value_parser = parse_positive_usize)]
    pub cpus: Option<PositiveUsize>,

    /// Path to a TOML config file. Defaults to ./hey.toml if present
    #[arg(long = "config", env = "HEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level unless overridden by HEY_LOG/RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Target URL
    #[arg(value_name = "URL")]
    pub url: Option<String>,
}
