//! The authenticated fetch wrapper and its `get/post/put/delete` facade.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is recovered here. Network failures, non-2xx statuses, and
//! malformed success bodies all surface as [`ApiError`] to the caller.

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::headers::{APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, Headers};
use crate::request::{ApiRequest, Method, RequestOptions};
use crate::session::{Session, SessionAccessor};
use crate::transport::Transport;

/// Compose outgoing headers: `Content-Type: application/json`, then the
/// caller's headers, then `Authorization: Bearer <token>` when a non-empty
/// token is available. Later layers win on name collisions.
#[must_use]
pub fn build_headers(caller: &Headers, session: Option<&Session>) -> Headers {
    let mut headers = Headers::new().with(CONTENT_TYPE, APPLICATION_JSON);
    headers.extend_from(caller);
    if let Some(token) = session.and_then(Session::token) {
        headers.insert(AUTHORIZATION, format!("Bearer {token}"));
    }
    headers
}

/// One wrapper for every execution context; only the injected session
/// accessor and transport differ between browser and server.
#[derive(Debug, Clone)]
pub struct ApiClient<S, T> {
    config: ApiConfig,
    sessions: S,
    transport: T,
}

impl<S, T> ApiClient<S, T>
where
    S: SessionAccessor,
    T: Transport,
{
    #[must_use]
    pub fn new(config: ApiConfig, sessions: S, transport: T) -> Self {
        Self { config, sessions, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform one round trip to `base_url + endpoint` and return the parsed
    /// JSON body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidEndpoint`] if `endpoint` does not begin with `/`
    /// - [`ApiError::Network`] if the transport fails
    /// - [`ApiError::Status`] for a status outside `200..300`
    /// - [`ApiError::Parse`] if a success body is not JSON
    pub async fn call(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        if !endpoint.starts_with('/') {
            return Err(ApiError::InvalidEndpoint(endpoint.to_owned()));
        }

        let session = self.sessions.current_session().await;
        let request = ApiRequest {
            method: options.method,
            url: self.config.url_for(endpoint),
            headers: build_headers(&options.headers, session.as_ref()),
            body: options.body,
        };
        log::debug!(
            "api request: {} {} (authenticated: {})",
            request.method,
            request.url,
            request.headers.contains(AUTHORIZATION)
        );

        let method = request.method;
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("api request {method} {endpoint} failed: {e}");
                return Err(e);
            }
        };

        if !response.is_success() {
            log::warn!("api request {method} {endpoint} returned {}", response.status);
            return Err(ApiError::Status {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `GET endpoint`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.call(endpoint, RequestOptions::method(Method::Get)).await
    }

    /// `GET endpoint`, deserialized into `R`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`]; a body of the wrong shape is [`ApiError::Parse`].
    pub async fn get_as<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        let value = self.get(endpoint).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `POST endpoint` with `data` serialized as the JSON body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Encode`] if `data` cannot be serialized; otherwise see
    /// [`ApiClient::call`].
    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, data: &B) -> Result<Value, ApiError> {
        self.call(endpoint, with_json_body(Method::Post, data)?).await
    }

    /// `PUT endpoint` with `data` serialized as the JSON body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Encode`] if `data` cannot be serialized; otherwise see
    /// [`ApiClient::call`].
    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, data: &B) -> Result<Value, ApiError> {
        self.call(endpoint, with_json_body(Method::Put, data)?).await
    }

    /// `DELETE endpoint`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub async fn delete(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.call(endpoint, RequestOptions::method(Method::Delete)).await
    }
}

fn with_json_body<B: Serialize + ?Sized>(method: Method, data: &B) -> Result<RequestOptions, ApiError> {
    let body = serde_json::to_string(data).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(RequestOptions::method(method).with_body(body))
}
