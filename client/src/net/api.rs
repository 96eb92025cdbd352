//! Browser-context API facade.
//!
//! Client-side (hydrate): calls go through [`apicall::ApiClient`] with the
//! cookie-backed [`BrowserSession`] and the `gloo-net` transport.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! calls are only made from event handlers in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller untouched; UI components decide
//! what to display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use apicall::ApiError;
use serde::Serialize;
use serde_json::Value;

#[cfg(feature = "hydrate")]
use super::session::BrowserSession;
use super::types::User;

/// Endpoint returning the signed-in user.
pub const CURRENT_USER_ENDPOINT: &str = "/users/me";

#[cfg(feature = "hydrate")]
type BrowserClient = apicall::ApiClient<BrowserSession, apicall::transport::GlooTransport>;

/// API base URL, captured at build time and resolved once per page load.
#[cfg(feature = "hydrate")]
fn browser_client() -> BrowserClient {
    static CONFIG: std::sync::OnceLock<apicall::ApiConfig> = std::sync::OnceLock::new();
    let config = CONFIG.get_or_init(apicall::ApiConfig::from_build_env).clone();
    apicall::ApiClient::new(config, BrowserSession, apicall::transport::GlooTransport)
}

/// `GET endpoint`.
///
/// # Errors
///
/// Propagates every [`ApiError`] from the wrapper.
pub async fn get(endpoint: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().get(endpoint).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// `POST endpoint` with `data` as the JSON body.
///
/// # Errors
///
/// Propagates every [`ApiError`] from the wrapper.
pub async fn post<B: Serialize + ?Sized>(endpoint: &str, data: &B) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().post(endpoint, data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, data);
        Err(ApiError::Unavailable)
    }
}

/// `PUT endpoint` with `data` as the JSON body.
///
/// # Errors
///
/// Propagates every [`ApiError`] from the wrapper.
pub async fn put<B: Serialize + ?Sized>(endpoint: &str, data: &B) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().put(endpoint, data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, data);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE endpoint`.
///
/// # Errors
///
/// Propagates every [`ApiError`] from the wrapper.
pub async fn delete(endpoint: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser_client().delete(endpoint).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user from [`CURRENT_USER_ENDPOINT`].
///
/// # Errors
///
/// Propagates wrapper errors; a body that is not a user is
/// [`ApiError::Parse`].
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let body = get(CURRENT_USER_ENDPOINT).await?;
    User::from_response(body)
}
