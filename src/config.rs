//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `SCM_REST_URL`: REST base path the browser calls, default `/scm/api/rest/`
//! - `SCM_UPSTREAM_URL`: SCM server that REST calls are forwarded to; no
//!   forwarding when absent
//! - `CONSOLE_TITLE`: title shown in the header, default `SCM Manager`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use console::config::{ConsoleSettings, DEFAULT_TITLE, normalize_rest_url};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("SCM_REST_URL must be an absolute path starting with `/`: {0}")]
    InvalidRestUrl(String),
    #[error("SCM_UPSTREAM_URL must be an http(s) URL: {0}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Always ends with `/`.
    pub rest_url: String,
    /// No trailing `/`.
    pub upstream_url: Option<String>,
    pub title: String,
}

impl HostConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let rest_url = normalize_rest_url(&lookup("SCM_REST_URL").unwrap_or_default());
        if !rest_url.starts_with('/') {
            return Err(ConfigError::InvalidRestUrl(rest_url));
        }

        let upstream_url = match non_blank(lookup("SCM_UPSTREAM_URL")) {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                Some(raw.trim_end_matches('/').to_owned())
            }
            Some(raw) => return Err(ConfigError::InvalidUpstream(raw)),
            None => None,
        };

        let title = non_blank(lookup("CONSOLE_TITLE")).unwrap_or_else(|| DEFAULT_TITLE.to_owned());

        Ok(Self { port, rest_url, upstream_url, title })
    }

    /// Settings handed to the console while rendering.
    #[must_use]
    pub fn settings(&self) -> ConsoleSettings {
        ConsoleSettings::new(&self.rest_url, &self.title)
    }

    /// Route prefix the proxy is mounted under, without the trailing `/`.
    #[must_use]
    pub fn proxy_prefix(&self) -> &str {
        self.rest_url.trim_end_matches('/')
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
