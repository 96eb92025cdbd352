//! Error taxonomy for API calls.

/// Errors surfaced by [`crate::ApiClient`]. The wrapper never recovers from
/// any of these; callers decide what to show.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The endpoint path did not begin with `/`.
    #[error("invalid endpoint {0:?}: must begin with '/'")]
    InvalidEndpoint(String),

    /// The transport could not complete the round trip (connection refused,
    /// DNS, aborted). Carries the transport's message unmodified.
    #[error("{0}")]
    Network(String),

    /// The remote API answered with a status outside `200..300`.
    #[error("API call failed: {status} {status_text} - {body}")]
    Status { status: u16, status_text: String, body: String },

    /// A success response body was not valid JSON (or not the expected shape).
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// A request payload could not be serialized to JSON.
    #[error("API request encode failed: {0}")]
    Encode(String),

    /// The call was made from a context with no transport (e.g. SSR pass of a
    /// browser-only helper).
    #[error("not available in this execution context")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of a [`ApiError::Status`] failure.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
