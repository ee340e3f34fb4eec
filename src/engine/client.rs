use base64::Engine as _;
use http::header::{AUTHORIZATION, HOST, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Proxy, redirect};

use super::work::Work;
use crate::error::EngineError;

/// Redirect hops followed when redirects are enabled.
const REDIRECT_LIMIT: usize = 10;

pub(super) fn build_client(work: &Work) -> Result<Client, EngineError> {
    let mut client_builder = Client::builder();

    if let Some(timeout) = work.timeout {
        client_builder = client_builder.timeout(timeout);
    }

    client_builder = if work.disable_redirects {
        client_builder.redirect(redirect::Policy::none())
    } else {
        client_builder.redirect(redirect::Policy::limited(REDIRECT_LIMIT))
    };

    if work.disable_keepalive {
        client_builder = client_builder
            .pool_max_idle_per_host(0)
            .pool_idle_timeout(Some(std::time::Duration::from_secs(0)));
    }

    if work.disable_compression {
        client_builder = client_builder.no_gzip().no_brotli().no_deflate();
    }

    if !work.http2 {
        client_builder = client_builder.http1_only();
    }

    if let Some(proxy_url) = work.proxy.as_ref() {
        let proxy = Proxy::all(proxy_url.as_str()).map_err(|err| EngineError::InvalidProxy {
            url: proxy_url.to_string(),
            source: err,
        })?;
        client_builder = client_builder.proxy(proxy);
    }

    client_builder
        .build()
        .map_err(|err| EngineError::BuildClient { source: err })
}

pub(super) fn resolve_method(work: &Work) -> Result<Method, EngineError> {
    Method::from_bytes(work.request.method.as_bytes()).map_err(|err| EngineError::InvalidMethod {
        method: work.request.method.clone(),
        source: err,
    })
}

/// Headers sent with every request: the template headers plus the host
/// override and basic-auth credentials, when present.
pub(super) fn template_headers(work: &Work) -> Result<HeaderMap, EngineError> {
    let mut headers = work.request.headers.clone();

    if let Some(host) = work.request.host.as_deref() {
        let value =
            HeaderValue::from_str(host).map_err(|err| EngineError::InvalidHeaderValue {
                name: "host",
                source: err,
            })?;
        headers.insert(HOST, value);
    }

    if let Some(auth) = work.request.auth.as_ref() {
        let token = format!("{}:{}", auth.username, auth.password);
        let encoded = base64::engine::general_purpose::STANDARD.encode(token.as_bytes());
        let value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|err| EngineError::InvalidHeaderValue {
                name: "authorization",
                source: err,
            })?;
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
