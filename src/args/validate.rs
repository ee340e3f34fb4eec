use std::time::Duration;

use tracing::info;
use url::Url;

use super::cli::HeyArgs;
use super::defaults::UNBOUNDED_REQUESTS;
use super::parsers::parse_basic_auth;
use super::types::{OutputMode, Params};
use crate::error::ValidationError;

const SCHEME_SEPARATOR: &str = "://";
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Checks the raw arguments in a fixed order and returns the validated
/// parameters. The first failing check is reported; nothing is accumulated.
///
/// # Errors
///
/// Returns the first [`ValidationError`] hit by the checks.
pub fn validate(args: &HeyArgs) -> Result<Params, ValidationError> {
    let raw_target = args.url.as_deref().unwrap_or_default();
    if raw_target.is_empty() {
        return Err(ValidationError::MissingTarget);
    }
    let target = normalize_target(raw_target);
    let target = Url::parse(&target).map_err(|err| ValidationError::InvalidUrl {
        url: target.clone(),
        source: err,
    })?;

    let auth = args
        .basic_auth
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(parse_basic_auth)
        .transpose()?;

    let output = args
        .output
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::parse::<OutputMode>)
        .transpose()?;

    let proxy = args
        .proxy
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(|raw| {
            Url::parse(raw).map_err(|err| ValidationError::InvalidProxyUrl {
                url: raw.to_owned(),
                source: err,
            })
        })
        .transpose()?;

    let (requests, concurrency) = check_load_shape(args.requests, args.concurrency, args.duration)?;

    Ok(Params {
        target,
        method: args.method.clone(),
        content_type: args.content_type.clone(),
        headers: args.headers.clone(),
        accept: args.accept.clone(),
        body: args.body.clone(),
        body_file: args.body_file.clone(),
        auth,
        host: args.host.clone().filter(|host| !host.is_empty()),
        proxy,
        output,
        requests,
        concurrency,
        qps: args.qps,
        duration: args.duration,
        timeout: Duration::from_secs(args.timeout),
        http2: args.http2,
        disable_compression: args.disable_compression,
        disable_keepalive: args.disable_keepalive,
        disable_redirects: args.disable_redirects,
    })
}

fn normalize_target(raw: &str) -> String {
    if raw.contains(SCHEME_SEPARATOR) {
        return raw.to_owned();
    }
    let corrected = format!("{}{}", DEFAULT_SCHEME_PREFIX, raw);
    info!("Target URL corrected to {}", corrected);
    corrected
}

/// Resolves the request count and concurrency for the run.
///
/// A single request skips every check. A positive duration replaces the
/// count with [`UNBOUNDED_REQUESTS`].
fn check_load_shape(
    requests: i64,
    concurrency: i64,
    duration: Duration,
) -> Result<(u64, u64), ValidationError> {
    if requests == 1 {
        return Ok((1, u64::try_from(concurrency).unwrap_or(0)));
    }

    let concurrency_checked =
        u64::try_from(concurrency)
            .ok()
            .filter(|value| *value >= 1)
            .ok_or(ValidationError::InvalidConcurrency { value: concurrency });

    if !duration.is_zero() {
        return Ok((UNBOUNDED_REQUESTS, concurrency_checked?));
    }

    let requests_checked = u64::try_from(requests)
        .ok()
        .filter(|value| *value >= 1)
        .ok_or(ValidationError::InvalidCount { value: requests })?;
    let concurrency_checked = concurrency_checked?;
    if requests_checked < concurrency_checked {
        return Err(ValidationError::CountBelowConcurrency {
            requests,
            concurrency,
        });
    }
    Ok((requests_checked, concurrency_checked))
}
