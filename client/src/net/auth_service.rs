//! Login, registration and session lifecycle against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call this service; it talks to the backend through an
//! [`ApiTransport`] and records issued tokens in the [`SessionStore`].
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` hand failures back untouched so each page decides
//! what to show. `current_user` is the one call that recovers locally: any
//! failure reads as "no current user". The store is only written after a
//! successful response.

#[cfg(test)]
#[path = "auth_service_test.rs"]
mod auth_service_test;

use serde_json::Value;

use super::api::{ApiError, ApiTransport, CURRENT_USER_PATH, HttpTransport, LOGIN_PATH, REGISTER_PATH};
use super::types::{Credentials, RegistrationPayload, SessionTokens, User};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Route the browser lands on after logout.
pub const LOGIN_ROUTE: &str = "/login";

/// Auth operations over a transport and a session store.
#[derive(Clone, Debug)]
pub struct AuthService<T, S> {
    transport: T,
    session: SessionStore<S>,
}

impl AuthService<HttpTransport, BrowserStorage> {
    /// Service wired to the configured backend and `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(HttpTransport::from_config(), SessionStore::browser())
    }
}

impl<T: ApiTransport, S: KeyValueStorage> AuthService<T, S> {
    pub fn new(transport: T, session: SessionStore<S>) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Authenticate with email and password.
    ///
    /// When the response carries an access token both tokens are persisted.
    /// The raw response body is returned either way.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged; nothing is persisted.
    pub async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        let payload = serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.transport.post_json(LOGIN_PATH, &payload).await?;
        match SessionTokens::from_login_body(&body) {
            Some(tokens) if self.session.set(&tokens) => log::debug!("login succeeded; session stored"),
            Some(_) => log::warn!("login succeeded but the session could not be stored"),
            None => log::debug!("login response carried no access token"),
        }
        Ok(body)
    }

    /// Create an account and business record.
    ///
    /// When the response carries a `tokens` object both tokens are persisted.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged; nothing is persisted.
    pub async fn register(&self, payload: &RegistrationPayload) -> Result<Value, ApiError> {
        let payload = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.transport.post_json(REGISTER_PATH, &payload).await?;
        if let Some(tokens) = SessionTokens::from_register_body(&body) {
            if self.session.set(&tokens) {
                log::debug!("registration succeeded; session stored");
            } else {
                log::warn!("registration succeeded but the session could not be stored");
            }
        }
        Ok(body)
    }

    /// Drop the local session and reload on the login page.
    ///
    /// Local only; the backend is not told.
    pub fn logout(&self) {
        self.session.clear();
        log::debug!("session cleared");
        crate::util::browser::redirect(LOGIN_ROUTE);
    }

    /// Fetch the user behind the stored access token.
    ///
    /// Returns `None` without a token and on any failure.
    pub async fn current_user(&self) -> Option<User> {
        let token = self.session.access_token()?;
        let body = match self.transport.get_json(CURRENT_USER_PATH, Some(&token)).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("current user lookup failed: {e}");
                return None;
            }
        };
        match serde_json::from_value::<User>(body) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("current user response malformed: {e}");
                None
            }
        }
    }

    /// Whether an access token is stored. Always false without persistent
    /// storage. Presence only; the token is not validated.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_available() && self.session.has_access_token()
    }

    /// Bring `state` in line with the session store. Returns whether it
    /// changed, for use with `maybe_update`.
    pub fn sync_state(&self, state: &mut AuthState) -> bool {
        state.sync(self.is_authenticated())
    }
}
