//! Forwarding of REST calls to the upstream SCM server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser console calls `<SCM_REST_URL>…` on its own origin. When an
//! upstream is configured these requests are relayed verbatim (method, path
//! tail, query and body) so session cookies stay first-party. Only the
//! headers the console relies on cross the proxy in either direction.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderName, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::any;

/// Request headers copied to the upstream request.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, COOKIE, ACCEPT];
/// Response headers copied back to the browser.
pub const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Clone, Debug)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

/// Routes forwarding every method under `prefix` to `upstream`.
pub fn proxy_routes(prefix: &str, upstream: &str) -> Router {
    let state = Arc::new(ProxyState { client: reqwest::Client::new(), upstream: upstream.to_owned() });
    Router::new().route(&format!("{prefix}/{{*path}}"), any(forward)).with_state(state)
}

/// Upstream URL for a proxied path tail and optional query string.
pub fn upstream_url(upstream: &str, path: &str, query: Option<&str>) -> String {
    let base = format!("{}/{}", upstream.trim_end_matches('/'), path.trim_start_matches('/'));
    match query {
        Some(q) if !q.is_empty() => format!("{base}?{q}"),
        _ => base,
    }
}

/// Copy the headers in `allowed` from `source`, keeping repeated values.
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

async fn forward(
    State(proxy): State<Arc<ProxyState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&proxy.upstream, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding REST request");

    let upstream = proxy
        .client
        .request(method, &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    Ok((status, response_headers, bytes).into_response())
}
