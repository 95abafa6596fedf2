//! Request and response DTOs for the autoDF backend API.
//!
//! DESIGN
//! ======
//! Request payloads are strongly typed. Responses are handed back to pages as
//! raw JSON, so only the parts the client reads (tokens, current user) get a
//! typed view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login form payload for `POST /api/auth/login/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up form payload for `POST /api/auth/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub email: String,
    pub password: String,
    pub name_business: String,
    /// French business registration number, 14 digits.
    pub siret: String,
}

/// Access/refresh token pair persisted by the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}

impl SessionTokens {
    /// Extract tokens from a login response.
    ///
    /// The access token is read at the top level first (`{access, refresh}`)
    /// and then under `tokens` (`{tokens: {access, refresh}}`). An empty or
    /// missing access token means no session was issued.
    #[must_use]
    pub fn from_login_body(body: &serde_json::Value) -> Option<Self> {
        Self::from_pair(body).or_else(|| Self::from_register_body(body))
    }

    /// Extract tokens from a register response (`{tokens: {access, refresh}}`).
    #[must_use]
    pub fn from_register_body(body: &serde_json::Value) -> Option<Self> {
        body.get("tokens").and_then(Self::from_pair)
    }

    fn from_pair(value: &serde_json::Value) -> Option<Self> {
        let access = value.get("access")?.as_str().filter(|s| !s.is_empty())?;
        let refresh = value.get("refresh").and_then(serde_json::Value::as_str).unwrap_or_default();
        Some(Self { access: access.to_owned(), refresh: refresh.to_owned() })
    }
}

/// Current user as returned by `GET /api/auth/me/`.
///
/// The backend owns this shape. Known profile fields are typed; everything
/// else is kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name_business: Option<String>,
    #[serde(default)]
    pub siret: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Best human-readable name: business name, then full name, then email.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let non_empty = |s: &Option<String>| s.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);

        if let Some(name) = non_empty(&self.name_business) {
            return Some(name);
        }
        let full = [non_empty(&self.first_name), non_empty(&self.last_name)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return Some(full);
        }
        non_empty(&self.email)
    }
}
