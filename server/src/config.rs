//! Server configuration loaded from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup. Every loader takes a lookup function so tests can
//! feed values without touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use apicall::{API_URL_ENV, ApiConfig};

use crate::services::auth::AuthConfig;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Everything `main` needs to assemble [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub api: ApiConfig,
    /// `None` disables `/auth/login` and `/auth/signup`.
    pub auth: Option<AuthConfig>,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api = ApiConfig::from_value(lookup(API_URL_ENV).as_deref());
        let auth = AuthConfig::from_lookup(&lookup);

        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or_else(|| {
                let auth_https = auth.as_ref().is_some_and(|a| a.url.starts_with("https://"));
                auth_https || api.base_url.starts_with("https://")
            });

        Ok(Self { port, api, auth, cookie_secure })
    }
}

/// Parse the usual boolean spellings, case-insensitively.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
