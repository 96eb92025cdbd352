//! Auth provider service: password sign-in and sign-up against a
//! GoTrue-compatible auth endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider issues sessions; this service only exchanges credentials for
//! an access token. Cookie handling lives in `routes::auth`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

const URL_ENV: &str = "NEXT_PUBLIC_SUPABASE_URL";
const URL_ENV_ALT: &str = "AUTH_URL";
const ANON_KEY_ENV: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
const ANON_KEY_ENV_ALT: &str = "AUTH_ANON_KEY";

/// Form body posted by the login page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Session returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
    /// Lifetime in seconds, when the provider reports one.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth provider not configured")]
    NotConfigured,
    #[error("invalid credentials form: {0}")]
    InvalidForm(String),
    #[error("auth request failed: {0}")]
    Request(String),
    #[error("auth provider rejected request: {status} {body}")]
    Rejected { status: u16, body: String },
    #[error("unexpected auth response: {0}")]
    Parse(String),
}

/// Credential exchange with the hosted auth service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange email and password for a session.
    async fn sign_in(&self, credentials: &Credentials) -> Result<ProviderSession, AuthError>;

    /// Register a new account. `None` means the account was created but no
    /// session was issued yet (e.g. email confirmation pending).
    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<ProviderSession>, AuthError>;
}

// =============================================================================
// CONFIG
// =============================================================================

/// Provider location and public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub url: String,
    pub anon_key: String,
}

impl AuthConfig {
    /// Load from `NEXT_PUBLIC_SUPABASE_URL` / `NEXT_PUBLIC_SUPABASE_ANON_KEY`
    /// (or `AUTH_URL` / `AUTH_ANON_KEY`). Returns `None` if either is missing
    /// or empty (auth will be disabled).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let first = |keys: [&str; 2]| {
            keys.into_iter()
                .filter_map(&lookup)
                .map(|v| v.trim().to_owned())
                .find(|v| !v.is_empty())
        };
        let url = first([URL_ENV, URL_ENV_ALT])?;
        let anon_key = first([ANON_KEY_ENV, ANON_KEY_ENV_ALT])?;
        Some(Self { url: url.trim_end_matches('/').to_owned(), anon_key })
    }

    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.url)
    }

    #[must_use]
    pub fn signup_url(&self) -> String {
        format!("{}/auth/v1/signup", self.url)
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

/// Parse a token-endpoint body. A missing or empty `access_token` is an error.
pub(crate) fn parse_session_response(body: &str) -> Result<ProviderSession, AuthError> {
    let session: ProviderSession =
        serde_json::from_str(body).map_err(|_| AuthError::Parse(format!("unexpected response: {body}")))?;
    if session.access_token.is_empty() {
        return Err(AuthError::Parse("empty access_token".into()));
    }
    Ok(session)
}

/// Parse a signup body: a session when the account is auto-confirmed, a bare
/// user object otherwise.
pub(crate) fn parse_signup_response(body: &str) -> Result<Option<ProviderSession>, AuthError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| AuthError::Parse(format!("unexpected response: {body}")))?;
    match value.get("access_token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => parse_session_response(body).map(Some),
        _ => Ok(None),
    }
}

// =============================================================================
// GOTRUE
// =============================================================================

/// [`AuthProvider`] over HTTP.
#[derive(Debug, Clone)]
pub struct GoTrueProvider {
    config: AuthConfig,
    http: reqwest::Client,
}

impl GoTrueProvider {
    #[must_use]
    pub fn new(config: AuthConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    async fn post_credentials(&self, url: &str, credentials: &Credentials) -> Result<String, AuthError> {
        let resp = self
            .http
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(AuthError::Rejected { status: status.as_u16(), body });
        }
        Ok(body)
    }
}

#[async_trait]
impl AuthProvider for GoTrueProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<ProviderSession, AuthError> {
        let body = self.post_credentials(&self.config.token_url(), credentials).await?;
        parse_session_response(&body)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<ProviderSession>, AuthError> {
        let body = self.post_credentials(&self.config.signup_url(), credentials).await?;
        parse_signup_response(&body)
    }
}
