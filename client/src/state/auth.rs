//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context. The navigation bar reads it.
//! Login, register and every route change re-sync it from the session store,
//! and logout resets it, so it never claims a session the store does not hold.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state shared across components.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Whether an access token is stored.
    pub authenticated: bool,
    /// Current user, once fetched.
    pub user: Option<User>,
}

impl AuthState {
    /// Re-sync with the session store.
    ///
    /// Losing the session also drops any cached user. Returns whether the
    /// state changed.
    pub fn sync(&mut self, authenticated: bool) -> bool {
        if self.authenticated == authenticated {
            return false;
        }
        self.authenticated = authenticated;
        if !authenticated {
            self.user = None;
        }
        true
    }

    /// Record a logout.
    pub fn signed_out(&mut self) {
        self.authenticated = false;
        self.user = None;
    }
}
