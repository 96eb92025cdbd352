//! Current-user route: the remote `/users/me` fetched server-side with the
//! caller's session cookie.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;

use apicall::ApiError;
use client::net::api::CURRENT_USER_ENDPOINT;

use crate::services::session::CookieSession;
use crate::state::AppState;

/// Response for a failed upstream call. Upstream status errors are relayed
/// as-is; anything else is a gateway failure.
fn error_response(err: ApiError) -> Response {
    match err {
        ApiError::Status { status, body, .. } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, body).into_response()
        }
        other => (StatusCode::BAD_GATEWAY, other.to_string()).into_response(),
    }
}

/// `GET /api/users/me`: return the signed-in user from the remote API.
pub async fn current_user(State(state): State<AppState>, jar: CookieJar) -> Response {
    let api = state.server_api(CookieSession::from_jar(&jar));
    match api.get(CURRENT_USER_ENDPOINT).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "current user fetch failed");
            error_response(e)
        }
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
