//! Login page form actions: password sign-in and sign-up.
//!
//! Both actions answer with `303 See Other` so the browser follows with a
//! `GET`: to `/` on success, to `/error` on any failure.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use apicall::SESSION_COOKIE;

use crate::services::auth::{AuthError, AuthProvider, Credentials, ProviderSession};
use crate::state::AppState;

const HOME_PATH: &str = "/";
const ERROR_PATH: &str = "/error";

/// Session cookie for a provider session. Readable from script so the
/// browser-side API client can attach the token.
fn session_cookie(session: ProviderSession, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, session.access_token))
        .path("/")
        .http_only(false)
        .same_site(SameSite::Lax)
        .secure(secure);
    if let Some(seconds) = session.expires_in.filter(|s| *s > 0) {
        cookie = cookie.max_age(Duration::seconds(seconds));
    }
    cookie.build()
}

fn provider(state: &AppState) -> Result<&dyn AuthProvider, AuthError> {
    state.auth.as_deref().ok_or(AuthError::NotConfigured)
}

/// Malformed forms (missing field, wrong content type) redirect to `/error`
/// like any provider failure.
fn credentials(form: Result<Form<Credentials>, FormRejection>) -> Result<Credentials, AuthError> {
    form.map(|Form(credentials)| credentials)
        .map_err(|e| AuthError::InvalidForm(e.body_text()))
}

async fn sign_in(state: &AppState, form: Result<Form<Credentials>, FormRejection>) -> Result<Option<ProviderSession>, AuthError> {
    let credentials = credentials(form)?;
    provider(state)?.sign_in(&credentials).await.map(Some)
}

async fn sign_up(state: &AppState, form: Result<Form<Credentials>, FormRejection>) -> Result<Option<ProviderSession>, AuthError> {
    let credentials = credentials(form)?;
    provider(state)?.sign_up(&credentials).await
}

fn finish(state: &AppState, jar: CookieJar, action: &str, result: Result<Option<ProviderSession>, AuthError>) -> Response {
    match result {
        Ok(Some(session)) => {
            let jar = jar.add(session_cookie(session, state.cookie_secure));
            (jar, Redirect::to(HOME_PATH)).into_response()
        }
        Ok(None) => {
            tracing::info!(action, "account created, no session issued");
            Redirect::to(HOME_PATH).into_response()
        }
        Err(e) => {
            tracing::error!(action, error = %e, "auth action failed");
            Redirect::to(ERROR_PATH).into_response()
        }
    }
}

/// `POST /auth/login`: exchange credentials for a session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<Credentials>, FormRejection>,
) -> Response {
    let result = sign_in(&state, form).await;
    finish(&state, jar, "login", result)
}

/// `POST /auth/signup`: register, then sign in when the provider issues a
/// session immediately.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<Credentials>, FormRejection>,
) -> Response {
    let result = sign_up(&state, form).await;
    finish(&state, jar, "signup", result)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
