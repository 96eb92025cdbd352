#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    if config.auth.is_none() {
        tracing::warn!("auth provider not configured; login and signup disabled");
    }
    tracing::info!(api_url = %config.api.base_url, "remote API configured");

    let state = state::AppState::from_config(&config);
    let app = routes::app(state).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "front end listening");
    axum::serve(listener, app).await.expect("server failed");
}
