use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::args::TOOL_USER_AGENT;
use crate::args::test_support::validated_params;
use crate::error::{AppError, AppResult, RequestError};

fn header<'req>(request: &'req RequestDescriptor, name: &str) -> Option<&'req str> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
}

#[test]
fn method_is_uppercased_without_verb_check() -> AppResult<()> {
    let params = validated_params(["hey", "-m", "purge", "http://localhost"])?;
    let request = build_request(&params)?;
    if request.method != "PURGE" {
        return Err(AppError::validation(format!(
            "Unexpected method: {}",
            request.method
        )));
    }
    Ok(())
}

#[test]
fn content_type_defaults_to_text_html() -> AppResult<()> {
    let params = validated_params(["hey", "http://localhost"])?;
    let request = build_request(&params)?;
    if header(&request, "content-type") != Some("text/html") {
        return Err(AppError::validation("Unexpected Content-Type"));
    }
    Ok(())
}

#[test]
fn custom_headers_are_parsed_and_last_one_wins() -> AppResult<()> {
    let params = validated_params([
        "hey",
        "-T",
        "application/json",
        "-H",
        "X-Test: value",
        "-H",
        "content-type: application/xml",
        "-H",
        "x-test:   second  ",
        "http://localhost",
    ])?;
    let request = build_request(&params)?;
    if header(&request, "X-Test") != Some("second") {
        return Err(AppError::validation(format!(
            "Unexpected X-Test: {:?}",
            header(&request, "X-Test")
        )));
    }
    if request.headers.get_all("x-test").iter().count() != 1 {
        return Err(AppError::validation("Expected a single X-Test value"));
    }
    if header(&request, "Content-Type") != Some("application/xml") {
        return Err(AppError::validation("Expected -H to override -T"));
    }
    Ok(())
}

#[test]
fn malformed_header_names_the_input() -> AppResult<()> {
    let params = validated_params(["hey", "-H", "NoColonHere", "http://localhost"])?;
    match build_request(&params) {
        Err(RequestError::MalformedHeader { value }) if value == "NoColonHere" => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected MalformedHeader, got {:?}",
            other
        ))),
    }
}

#[test]
fn accept_overrides_header_flag_only_when_set() -> AppResult<()> {
    let params = validated_params([
        "hey",
        "-H",
        "Accept: text/plain",
        "-A",
        "application/json",
        "http://localhost",
    ])?;
    let request = build_request(&params)?;
    if header(&request, "Accept") != Some("application/json") {
        return Err(AppError::validation("Expected -A to win"));
    }

    let params = validated_params(["hey", "-H", "Accept: text/plain", "-A", "", "http://localhost"])?;
    let request = build_request(&params)?;
    if header(&request, "Accept") != Some("text/plain") {
        return Err(AppError::validation("Expected empty -A to be ignored"));
    }
    Ok(())
}

#[test]
fn literal_body_is_used() -> AppResult<()> {
    let params = validated_params(["hey", "-d", "abc", "http://localhost"])?;
    let request = build_request(&params)?;
    if request.body != b"abc" || request.content_length != 3 {
        return Err(AppError::validation("Unexpected body"));
    }
    Ok(())
}

#[test]
fn body_file_wins_over_literal() -> AppResult<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"xyz")?;
    let path = file.path().to_string_lossy().into_owned();

    let params = validated_params(["hey", "-d", "abc", "-D", path.as_str(), "http://localhost"])?;
    let request = build_request(&params)?;
    if request.body != b"xyz" || request.content_length != 3 {
        return Err(AppError::validation(format!(
            "Unexpected body: {:?}",
            String::from_utf8_lossy(&request.body)
        )));
    }
    Ok(())
}

#[test]
fn unreadable_body_file_is_an_io_error() -> AppResult<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.txt");
    let missing = missing.to_string_lossy().into_owned();
    let params = validated_params(["hey", "-D", missing.as_str(), "http://localhost"])?;
    match build_request(&params) {
        Err(err @ RequestError::ReadBodyFile { .. }) => {
            if AppError::from(err).shows_usage() {
                return Err(AppError::validation("I/O errors must not show usage"));
            }
            Ok(())
        }
        other => Err(AppError::validation(format!(
            "Expected ReadBodyFile, got {:?}",
            other
        ))),
    }
}

#[test]
fn empty_body_has_zero_length() -> AppResult<()> {
    let params = validated_params(["hey", "http://localhost"])?;
    let request = build_request(&params)?;
    if !request.body.is_empty() || request.content_length != 0 {
        return Err(AppError::validation("Expected empty body"));
    }
    Ok(())
}

#[test]
fn auth_and_host_override_are_attached() -> AppResult<()> {
    let params = validated_params([
        "hey",
        "-a",
        "alice:secret",
        "--host",
        "api.internal",
        "http://localhost",
    ])?;
    let request = build_request(&params)?;
    let auth_ok = request
        .auth
        .as_ref()
        .is_some_and(|auth| auth.username == "alice" && auth.password == "secret");
    if !auth_ok {
        return Err(AppError::validation("Expected auth credentials"));
    }
    if request.host.as_deref() != Some("api.internal") {
        return Err(AppError::validation("Expected host override"));
    }
    Ok(())
}

#[test]
fn user_agent_is_tool_identifier_by_default() -> AppResult<()> {
    if compose_user_agent(b"") != TOOL_USER_AGENT.as_bytes() {
        return Err(AppError::validation("Expected bare tool identifier"));
    }
    let params = validated_params(["hey", "http://localhost"])?;
    let request = build_request(&params)?;
    if header(&request, "User-Agent") != Some(TOOL_USER_AGENT) {
        return Err(AppError::validation("Unexpected User-Agent"));
    }
    Ok(())
}

#[test]
fn user_agent_appends_tool_identifier() -> AppResult<()> {
    let expected = format!("X {}", TOOL_USER_AGENT);
    if compose_user_agent(b"X") != expected.as_bytes() {
        return Err(AppError::validation("Expected appended tool identifier"));
    }
    let params = validated_params(["hey", "-H", "User-Agent: X", "http://localhost"])?;
    let request = build_request(&params)?;
    if header(&request, "user-agent") != Some(expected.as_str()) {
        return Err(AppError::validation(format!(
            "Unexpected User-Agent: {:?}",
            header(&request, "user-agent")
        )));
    }
    Ok(())
}

#[test]
fn user_agent_keeps_non_ascii_base() -> AppResult<()> {
    let params = validated_params(["hey", "-H", "User-Agent: café-bot", "http://localhost"])?;
    let request = build_request(&params)?;
    let expected = format!("café-bot {}", TOOL_USER_AGENT);
    let actual = request
        .headers
        .get("user-agent")
        .map(http::HeaderValue::as_bytes);
    if actual != Some(expected.as_bytes()) {
        return Err(AppError::validation(format!(
            "Unexpected User-Agent bytes: {:?}",
            actual
        )));
    }
    Ok(())
}
