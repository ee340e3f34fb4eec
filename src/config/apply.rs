use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{HeyArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Flags given explicitly on
/// the command line always win.
///
/// # Errors
///
/// Returns an error when a config value is out of range or malformed.
pub fn apply_config(args: &mut HeyArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "requests")
        && let Some(requests) = config.requests
    {
        args.requests = requests;
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = concurrency;
    }

    if !is_cli(matches, "qps")
        && let Some(qps) = config.qps
    {
        args.qps = qps;
    }

    if !is_cli(matches, "duration")
        && let Some(duration) = config.duration.as_ref()
    {
        args.duration = duration.to_duration()?;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "method")
        && let Some(method) = config.method.clone()
    {
        args.method = method;
    }

    if !is_cli(matches, "content_type")
        && let Some(content_type) = config.content_type.clone()
    {
        args.content_type = content_type;
    }

    if !is_cli(matches, "headers")
        && let Some(headers) = config.headers.clone()
    {
        args.headers = headers;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout
    {
        args.timeout = timeout;
    }

    if !is_cli(matches, "accept")
        && let Some(accept) = config.accept.clone()
    {
        args.accept = Some(accept);
    }

    if !is_cli(matches, "body")
        && let Some(body) = config.body.clone()
    {
        args.body = Some(body);
    }

    if !is_cli(matches, "body_file")
        && let Some(body_file) = config.body_file.clone()
    {
        args.body_file = Some(body_file);
    }

    if !is_cli(matches, "basic_auth")
        && let Some(basic_auth) = config.basic_auth.clone()
    {
        args.basic_auth = Some(basic_auth);
    }

    if !is_cli(matches, "proxy")
        && let Some(proxy) = config.proxy.clone()
    {
        args.proxy = Some(proxy);
    }

    if !is_cli(matches, "host")
        && let Some(host) = config.host.clone()
    {
        args.host = Some(host);
    }

    apply_flag(matches, "http2", config.http2, &mut args.http2);
    apply_flag(
        matches,
        "disable_compression",
        config.disable_compression,
        &mut args.disable_compression,
    );
    apply_flag(
        matches,
        "disable_keepalive",
        config.disable_keepalive,
        &mut args.disable_keepalive,
    );
    apply_flag(
        matches,
        "disable_redirects",
        config.disable_redirects,
        &mut args.disable_redirects,
    );

    if !is_cli(matches, "cpus")
        && let Some(cpus) = config.cpus
    {
        args.cpus = Some(PositiveUsize::try_from(cpus).map_err(|_err| {
            AppError::config(ConfigError::ValueTooSmall {
                field: "cpus",
                min: 1,
            })
        })?);
    }

    Ok(())
}

fn apply_flag(matches: &ArgMatches, name: &str, value: Option<bool>, target: &mut bool) {
    if !is_cli(matches, name)
        && let Some(value) = value
    {
        *target = value;
    }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
