//! Session lookup capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth provider issues and refreshes sessions; this crate only reads the
//! current access token once per call. Both execution contexts read the same
//! cookie: the browser through `document.cookie`, the server through the
//! incoming request's `Cookie` header.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Cookie holding the provider-issued access token. Not `HttpOnly`: the
/// browser accessor must be able to read it.
pub const SESSION_COOKIE: &str = "sb-access-token";

/// Session issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
}

impl Session {
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into() }
    }

    /// The access token, or `None` when it is empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        Some(self.access_token.as_str()).filter(|t| !t.is_empty())
    }
}

/// Obtains the current session for one call. Lookup failures are reported as
/// "no session"; the request then goes out unauthenticated.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait SessionAccessor {
    async fn current_session(&self) -> Option<Session>;
}

/// Extract the session from a `Cookie` header value (`a=1; b=2`).
#[must_use]
pub fn session_from_cookie_header(header: &str) -> Option<Session> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
        .map(Session::new)
}
