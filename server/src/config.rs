//! Server configuration parsed from environment variables.
//!
//! Read once at start-up, after `dotenvy` has loaded any `.env` file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{compiled_api_url, normalize_base_url};

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL handed to the browser through the page shell.
    pub api_base_url: String,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTODF_API_URL`: default is the value compiled into the client
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_base_url = normalize_base_url(lookup("AUTODF_API_URL").as_deref())
            .unwrap_or_else(|| compiled_api_url().trim_end_matches('/').to_owned());

        Ok(Self { port, api_base_url })
    }
}
