use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::debug;
use url::Url;

use super::body::resolve_body;
use crate::args::{BasicAuth, Params, TOOL_USER_AGENT, parse_header};
use crate::error::RequestError;

/// The single request template every dispatched request is cloned from.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: String,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub content_length: usize,
    pub auth: Option<BasicAuth>,
    pub host: Option<String>,
}

/// Builds the request template from validated parameters.
///
/// # Errors
///
/// Returns an error when a header line is malformed, a header value contains
/// characters HTTP does not allow, or the body file cannot be read.
pub fn build_request(params: &Params) -> Result<RequestDescriptor, RequestError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        header_value(CONTENT_TYPE.as_str(), params.content_type())?,
    );

    for raw in params.headers() {
        let (name, value) = parse_header(raw)
            .and_then(|(name, value)| Some((HeaderName::from_bytes(name.as_bytes()).ok()?, value)))
            .ok_or_else(|| RequestError::MalformedHeader { value: raw.clone() })?;
        let value = header_value(name.as_str(), &value)?;
        headers.insert(name, value);
    }

    if let Some(accept) = params.accept().filter(|value| !value.is_empty()) {
        headers.insert(ACCEPT, header_value(ACCEPT.as_str(), accept)?);
    }

    let base_agent = headers
        .get(USER_AGENT)
        .map(HeaderValue::as_bytes)
        .unwrap_or_default();
    let user_agent = compose_user_agent(base_agent);
    let user_agent =
        HeaderValue::from_bytes(&user_agent).map_err(|err| RequestError::InvalidHeaderValue {
            name: USER_AGENT.as_str().to_owned(),
            source: err,
        })?;
    headers.insert(USER_AGENT, user_agent);

    let body = resolve_body(params.body(), params.body_file())?;
    let content_length = body.len();
    debug!(
        method = %params.method().to_uppercase(),
        url = %params.target(),
        headers = headers.len(),
        content_length,
        "Built request template"
    );

    Ok(RequestDescriptor {
        method: params.method().to_uppercase(),
        url: params.target().clone(),
        headers,
        body,
        content_length,
        auth: params.auth().cloned(),
        host: params.host().map(str::to_owned),
    })
}

/// Appends the tool identifier to `base`, or uses it alone when `base` is
/// empty. Works on raw bytes so non-ASCII user agents are kept intact.
#[must_use]
pub fn compose_user_agent(base: &[u8]) -> Vec<u8> {
    if base.is_empty() {
        return TOOL_USER_AGENT.as_bytes().to_vec();
    }
    let mut composed = Vec::with_capacity(
        base.len()
            .saturating_add(TOOL_USER_AGENT.len())
            .saturating_add(1),
    );
    composed.extend_from_slice(base);
    composed.push(b' ');
    composed.extend_from_slice(TOOL_USER_AGENT.as_bytes());
    composed
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, RequestError> {
    HeaderValue::from_str(value).map_err(|err| RequestError::InvalidHeaderValue {
        name: name.to_owned(),
        source: err,
    })
}
