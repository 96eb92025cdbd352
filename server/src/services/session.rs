//! Server-side session accessor.
//!
//! The provider's access token rides in the [`SESSION_COOKIE`] cookie set by
//! `routes::auth`. Each inbound request gets its own [`CookieSession`] so the
//! outbound API call carries that request's user, never another's.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use apicall::{SESSION_COOKIE, Session, SessionAccessor};
use async_trait::async_trait;
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Session captured from one request's cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieSession {
    session: Option<Session>,
}

impl CookieSession {
    #[must_use]
    pub fn from_jar(jar: &CookieJar) -> Self {
        let session = jar
            .get(SESSION_COOKIE)
            .map(Cookie::value)
            .filter(|token| !token.is_empty())
            .map(Session::new);
        Self { session }
    }
}

#[async_trait]
impl SessionAccessor for CookieSession {
    async fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }
}
