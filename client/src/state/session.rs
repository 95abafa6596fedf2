//! Persisted session tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token's presence is the only authentication signal the client
//! has. Nothing here validates token shape or expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionTokens;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Storage key for the access token.
pub const TOKEN_KEY: &str = "autodf_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "autodf_refresh_token";

/// Access/refresh token pair kept under two fixed storage keys.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = BrowserStorage> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Session store over `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Write both tokens, replacing any previous session.
    ///
    /// A partial write is rolled back with [`Self::clear`], so the store never
    /// pairs an access token with another session's refresh token. Returns
    /// whether the pair was stored.
    pub fn set(&self, tokens: &SessionTokens) -> bool {
        let written =
            self.storage.set(TOKEN_KEY, &tokens.access) && self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh);
        if !written {
            self.clear();
        }
        written
    }

    /// Remove both tokens.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    /// Whether persistent storage exists (false outside a browser).
    pub fn is_available(&self) -> bool {
        self.storage.is_available()
    }

    pub fn has_access_token(&self) -> bool {
        self.storage.get(TOKEN_KEY).is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Both tokens, when an access token is stored. A missing refresh token
    /// reads as empty.
    pub fn tokens(&self) -> Option<SessionTokens> {
        let access = self.storage.get(TOKEN_KEY)?;
        let refresh = self.storage.get(REFRESH_TOKEN_KEY).unwrap_or_default();
        Some(SessionTokens { access, refresh })
    }
}
