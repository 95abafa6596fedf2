//! REST transport for the autoDF backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`ApiError::Unavailable`] since the backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses keep their parsed JSON body so pages can render the
//! backend's own validation messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::config;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const CURRENT_USER_PATH: &str = "/api/auth/me/";
pub const USERS_PATH: &str = "/api/users/";

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed: {status}")]
    Http { status: u16, body: Value },

    /// The request or response body was not valid JSON.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, when the backend responded.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of an HTTP failure, unless it was empty or not JSON.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Http { body, .. } if !body.is_null() => Some(body),
            _ => None,
        }
    }
}

/// JSON-over-HTTP seam used by the auth service.
#[allow(async_fn_in_trait)]
pub trait ApiTransport {
    /// `POST` a JSON body to `path`.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `GET` `path`, optionally with a bearer token.
    async fn get_json(&self, path: &str, bearer: Option<&str>) -> Result<Value, ApiError>;
}

/// HTTP client bound to the backend base URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Transport pointed at the configured API base URL.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(config::api_base_url())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        config::join_url(&self.base_url, path)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

impl ApiTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn get_json(&self, path: &str, bearer: Option<&str>) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.url(path));
            if let Some(token) = bearer {
                request = request.header("Authorization", &bearer_header(token));
            }
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, bearer);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        return Err(ApiError::Http { status, body });
    }
    resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Unauthenticated `GET /api/users/`.
///
/// # Errors
///
/// Propagates any transport or HTTP failure.
pub async fn fetch_users<T: ApiTransport>(transport: &T) -> Result<Value, ApiError> {
    transport.get_json(USERS_PATH, None).await
}
