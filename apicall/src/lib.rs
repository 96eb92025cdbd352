//! Authenticated JSON-over-HTTP calls shared by the browser and the server.
//!
//! This crate owns the request wrapper used by both `client` (hydrated WASM)
//! and `server` (Axum handlers). The execution context never leaks into the
//! wrapper itself: callers inject a [`SessionAccessor`] that knows where the
//! current access token lives and a [`Transport`] that knows how to put bytes
//! on the wire.
//!
//! ```text
//! facade (get/post/put/delete)
//!   -> ApiClient::call
//!        -> SessionAccessor::current_session   (token, if any)
//!        -> build_headers                      (Content-Type + caller + Authorization)
//!        -> Transport::send                    (reqwest | gloo-net)
//!        -> status check + JSON parse
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod request;
pub mod session;
pub mod transport;

pub use client::{ApiClient, build_headers};
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL};
pub use error::ApiError;
pub use headers::Headers;
pub use request::{ApiRequest, ApiResponse, Method, RequestOptions};
pub use session::{SESSION_COOKIE, Session, SessionAccessor, session_from_cookie_header};
pub use transport::Transport;
