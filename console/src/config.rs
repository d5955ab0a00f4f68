//! Runtime settings shared between the host and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads its environment, provides [`ConsoleSettings`] as Leptos
//! context while rendering, and writes the same values into `<meta>` tags.
//! On hydration the browser has no context from the server, so it re-reads
//! the tags.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_REST_URL: &str = "/scm/api/rest/";
pub const DEFAULT_TITLE: &str = "SCM Manager";

/// `<meta name=...>` carrying the REST base URL.
pub const REST_URL_META: &str = "scm-rest-url";
/// `<meta name=...>` carrying the console title.
pub const TITLE_META: &str = "scm-console-title";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Base URL every REST path is appended to. Always ends with `/`.
    pub rest_url: String,
    pub title: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self { rest_url: DEFAULT_REST_URL.to_owned(), title: DEFAULT_TITLE.to_owned() }
    }
}

impl ConsoleSettings {
    #[must_use]
    pub fn new(rest_url: &str, title: &str) -> Self {
        let title = title.trim();
        Self {
            rest_url: normalize_rest_url(rest_url),
            title: if title.is_empty() { DEFAULT_TITLE.to_owned() } else { title.to_owned() },
        }
    }

    /// Settings written into the page by the host, or the defaults.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let rest_url = read_meta(REST_URL_META).unwrap_or_default();
            let title = read_meta(TITLE_META).unwrap_or_default();
            Self::new(&rest_url, &title)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Absolute URL of a REST resource below the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.rest_url, path.trim_start_matches('/'))
    }
}

/// Blank input falls back to [`DEFAULT_REST_URL`]; otherwise a trailing `/`
/// is enforced so relative resource names can be appended directly.
#[must_use]
pub fn normalize_rest_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_REST_URL.to_owned();
    }
    if raw.ends_with('/') { raw.to_owned() } else { format!("{raw}/") }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
