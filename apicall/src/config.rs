//! Remote API location.
//!
//! The base URL is resolved once at startup and handed to every
//! [`crate::ApiClient`]; nothing in the request path reads the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Environment variable naming the remote API base URL.
pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Base URL used when [`API_URL_ENV`] is unset or empty.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Read-only configuration for the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix prepended verbatim to every endpoint path.
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Resolve from the process environment (server context).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Resolve from the environment captured at compile time (browser context,
    /// where no process environment exists at runtime).
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("NEXT_PUBLIC_API_URL"))
    }

    /// An empty value counts as unset.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Self::default(),
        }
    }

    /// Full request URL for an endpoint: plain `base_url + endpoint`.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
