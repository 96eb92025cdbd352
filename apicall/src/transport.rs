//! Wire transports.
//!
//! Client-side (feature `gloo`): browser `fetch` via `gloo-net`.
//! Server-side (feature `reqwest`): a shared `reqwest::Client`.
//!
//! Transports only move bytes: they never inspect status codes or parse
//! bodies, so every context gets identical success/failure semantics from
//! [`crate::ApiClient`].

use std::sync::Arc;

use crate::error::ApiError;
use crate::request::{ApiRequest, ApiResponse};

/// Performs one HTTP round trip.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response could be read.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl<T> Transport for Arc<T>
where
    T: Transport + Send + Sync + ?Sized,
{
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

// =============================================================================
// REQWEST
// =============================================================================

#[cfg(feature = "reqwest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use super::{ApiError, ApiRequest, ApiResponse, Transport};
    use crate::request::Method;

    /// Server-side transport. Cloning shares the underlying connection pool.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        http: reqwest::Client,
    }

    impl ReqwestTransport {
        #[must_use]
        pub fn new(http: reqwest::Client) -> Self {
            Self { http }
        }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    #[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let mut builder = self.http.request(method(request.method), &request.url);
            for (name, value) in request.headers.iter() {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            Ok(ApiResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
                body,
            })
        }
    }
}

// =============================================================================
// GLOO
// =============================================================================

#[cfg(feature = "gloo")]
pub use self::gloo_transport::GlooTransport;

#[cfg(feature = "gloo")]
mod gloo_transport {
    use gloo_net::http::RequestBuilder;

    use super::{ApiError, ApiRequest, ApiResponse, Transport};
    use crate::request::Method;

    /// Browser-side transport backed by `fetch`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct GlooTransport;

    fn method(method: Method) -> gloo_net::http::Method {
        match method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Patch => gloo_net::http::Method::PATCH,
            Method::Delete => gloo_net::http::Method::DELETE,
        }
    }

    #[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
    impl Transport for GlooTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            let mut builder = RequestBuilder::new(&request.url).method(method(request.method));
            for (name, value) in request.headers.iter() {
                builder = builder.header(name, value);
            }
            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let response = built
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            Ok(ApiResponse { status: response.status(), status_text: response.status_text(), body })
        }
    }
}
