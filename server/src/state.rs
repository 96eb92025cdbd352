//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds process-wide pieces only: the API location, one pooled transport,
//! and the auth provider. Per-request sessions are attached by
//! [`AppState::server_api`].

use std::sync::Arc;

use apicall::transport::ReqwestTransport;
use apicall::{ApiClient, ApiConfig, Transport};

use crate::config::ServerConfig;
use crate::services::auth::{AuthProvider, GoTrueProvider};
use crate::services::session::CookieSession;

pub type SharedTransport = Arc<dyn Transport + Send + Sync>;

/// API client bound to one request's cookies.
pub type ServerApi = ApiClient<CookieSession, SharedTransport>;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiConfig,
    pub transport: SharedTransport,
    /// `None` when no auth provider is configured.
    pub auth: Option<Arc<dyn AuthProvider>>,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(
        api: ApiConfig,
        transport: SharedTransport,
        auth: Option<Arc<dyn AuthProvider>>,
        cookie_secure: bool,
    ) -> Self {
        Self { api, transport, auth, cookie_secure }
    }

    /// Production wiring: one `reqwest::Client` shared by the API transport
    /// and the auth provider.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let http = reqwest::Client::new();
        let transport: SharedTransport = Arc::new(ReqwestTransport::new(http.clone()));
        let auth = config
            .auth
            .clone()
            .map(|auth| Arc::new(GoTrueProvider::new(auth, http)) as Arc<dyn AuthProvider>);
        Self::new(config.api.clone(), transport, auth, config.cookie_secure)
    }

    /// Remote API client acting as the user behind `session`.
    #[must_use]
    pub fn server_api(&self, session: CookieSession) -> ServerApi {
        ApiClient::new(self.api.clone(), session, Arc::clone(&self.transport))
    }
}
