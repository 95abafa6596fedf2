//! API base URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend lives on another origin. Its base URL is baked in at compile
//! time from `AUTODF_API_URL` and can be overridden at runtime by the server,
//! which renders `<meta name="autodf-api-url">` into the page shell.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the runtime API base URL.
pub const API_URL_META: &str = "autodf-api-url";

/// Fallback base URL when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL compiled into the bundle.
#[must_use]
pub fn compiled_api_url() -> &'static str {
    option_env!("AUTODF_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Resolve the API base URL: runtime `<meta>` value when present, else the
/// compiled default. Trailing slashes are trimmed.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(runtime_api_url().as_deref())
        .or_else(|| normalize_base_url(Some(compiled_api_url())))
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
}

/// Trim whitespace and trailing slashes; empty input yields `None`.
#[must_use]
pub fn normalize_base_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Join a base URL and an absolute API path.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn runtime_api_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let meta = document.query_selector(&format!("meta[name=\"{API_URL_META}\"]")).ok().flatten()?;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
