use super::*;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["hey", "http://localhost"])?;

    let checks = [
        (args.requests == 200, "Unexpected requests"),
        (args.concurrency == 50, "Unexpected concurrency"),
        (args.qps <= 0.0, "Expected unlimited qps"),
        (args.duration.is_zero(), "Expected duration to be disabled"),
        (args.output.is_none(), "Expected output to be None"),
        (args.method == "GET", "Unexpected method"),
        (args.content_type == "text/html", "Unexpected content_type"),
        (args.headers.is_empty(), "Expected no headers"),
        (args.timeout == 20, "Unexpected timeout"),
        (args.accept.is_none(), "Expected accept to be None"),
        (args.body.is_none(), "Expected body to be None"),
        (args.body_file.is_none(), "Expected body_file to be None"),
        (args.basic_auth.is_none(), "Expected basic_auth to be None"),
        (args.proxy.is_none(), "Expected proxy to be None"),
        (!args.http2, "Expected http2 to be false"),
        (args.host.is_none(), "Expected host to be None"),
        (!args.disable_compression, "Expected compression enabled"),
        (!args.disable_keepalive, "Expected keep-alive enabled"),
        (!args.disable_redirects, "Expected redirects enabled"),
        (args.cpus.is_none(), "Expected cpus to be None"),
        (
            args.url.as_deref() == Some("http://localhost"),
            "Unexpected url",
        ),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_collects_headers_in_order() -> AppResult<()> {
    let args = parse_test_args([
        "hey",
        "-H",
        "Accept: text/html",
        "-H",
        "X-Trace: 1",
        "-H",
        "Accept: application/xml",
        "http://localhost",
    ])?;
    let expected = ["Accept: text/html", "X-Trace: 1", "Accept: application/xml"];
    if args.headers != expected {
        return Err(AppError::validation(format!(
            "Unexpected headers: {:?}",
            args.headers
        )));
    }
    Ok(())
}

#[test]
fn parse_args_accepts_negative_counts() -> AppResult<()> {
    let args = parse_test_args(["hey", "-n", "-5", "-c", "-1", "http://localhost"])?;
    if args.requests != -5 || args.concurrency != -1 {
        return Err(AppError::validation("Expected negative values to reach validation"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_cpus() -> AppResult<()> {
    if parse_test_args(["hey", "--cpus", "0", "http://localhost"]).is_ok() {
        return Err(AppError::validation("Expected --cpus 0 to be rejected"));
    }
    Ok(())
}

#[test]
fn parse_args_duration_flag() -> AppResult<()> {
    let args = parse_test_args(["hey", "-z", "1m30s", "http://localhost"])?;
    if args.duration != Duration::from_secs(90) {
        return Err(AppError::validation(format!(
            "Unexpected duration: {:?}",
            args.duration
        )));
    }
    Ok(())
}

#[test]
fn tool_user_agent_names_the_tool() -> AppResult<()> {
    if !TOOL_USER_AGENT.starts_with("hey/") {
        return Err(AppError::validation(format!(
            "Unexpected tool user agent: {}",
            TOOL_USER_AGENT
        )));
    }
    Ok(())
}
