//! REST calls against the SCM server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the calls report
//! [`ApiError::Unavailable`] since they are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result`; callers render the error text instead of
//! panicking. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::config::ConsoleSettings;
use crate::net::gate::{AuthProbe, ProbeError};
use crate::state::grid::{GridError, RestGridConfig};

/// Identity endpoint answered with 2xx for an authenticated session.
pub const AUTHENTICATION_RESOURCE: &str = "authentication.json";
/// Form-encoded credential submission.
pub const LOGIN_RESOURCE: &str = "authentication/login.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{operation} failed: status {status}")]
    Status { operation: &'static str, status: u16 },
    #[error("response parse failed: {0}")]
    Parse(String),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("not available on server")]
    Unavailable,
}

/// Classify the identity endpoint's status code.
///
/// # Errors
///
/// Any non-2xx status is [`ProbeError::Rejected`].
pub fn probe_status_outcome(status: u16) -> Result<(), ProbeError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ProbeError::Rejected { status }) }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_result(operation: &'static str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status { operation, status }) }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(username: &str, password: &str) -> String {
    format!("username={}&password={}", urlencoding::encode(username), urlencoding::encode(password))
}

/// Extract the record list from a store response: either a bare array or an
/// object wrapping exactly one array.
#[cfg(any(test, feature = "hydrate"))]
fn records_from_json(body: Value) -> Result<Vec<Value>, ApiError> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => {
            let mut arrays = map.into_iter().filter_map(|(_, v)| match v {
                Value::Array(records) => Some(records),
                _ => None,
            });
            match (arrays.next(), arrays.next()) {
                (Some(records), None) => Ok(records),
                _ => Err(ApiError::Parse("expected a single record array".to_owned())),
            }
        }
        _ => Err(ApiError::Parse("expected a record array".to_owned())),
    }
}

/// Probe `GET <rest>authentication.json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthProbe {
    url: String,
}

impl HttpAuthProbe {
    #[must_use]
    pub fn new(settings: &ConsoleSettings) -> Self {
        Self { url: settings.endpoint(AUTHENTICATION_RESOURCE) }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait(?Send)]
impl AuthProbe for HttpAuthProbe {
    async fn probe(&self) -> Result<(), ProbeError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .send()
                .await
                .map_err(|e| ProbeError::Transport(e.to_string()))?;
            probe_status_outcome(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ProbeError::Transport("not available on server".to_owned()))
        }
    }
}

/// Submit credentials via `POST <rest>authentication/login.json`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects the
/// credentials.
pub async fn login(settings: &ConsoleSettings, username: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&settings.endpoint(LOGIN_RESOURCE))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(username, password))
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        status_result("login", resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (settings, username, password);
        Err(ApiError::Unavailable)
    }
}

/// Load the grid's records from its store URL.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status, or a body
/// that is not a record list.
pub async fn load_records(grid: &RestGridConfig) -> Result<Vec<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&grid.store_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        status_result("load", resp.status())?;
        let body: Value = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        records_from_json(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = grid;
        Err(ApiError::Unavailable)
    }
}

/// Create `record` via `POST <addUrl>`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn add_record(grid: &RestGridConfig, record: &Value) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&grid.add_url)
            .json(record)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        status_result("add", resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (grid, record);
        Err(ApiError::Unavailable)
    }
}

/// Update `record` via `PUT <editUrlPattern>`.
///
/// # Errors
///
/// Returns [`ApiError::Grid`] if the record has no id, otherwise an
/// [`ApiError`] if the request fails or is rejected.
pub async fn edit_record(grid: &RestGridConfig, record: &Value) -> Result<(), ApiError> {
    let url = grid.edit_url(record)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&url)
            .json(record)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        status_result("edit", resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Delete `record` via `DELETE <removeUrlPattern>`.
///
/// # Errors
///
/// Returns [`ApiError::Grid`] if the record has no id, otherwise an
/// [`ApiError`] if the request fails or is rejected.
pub async fn remove_record(grid: &RestGridConfig, record: &Value) -> Result<(), ApiError> {
    let url = grid.remove_url(record)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        status_result("remove", resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}
