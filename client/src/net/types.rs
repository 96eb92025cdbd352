//! Response schema for the remote API.
//!
//! DESIGN
//! ======
//! Fields mirror the `/users/me` body verbatim; display rules (initials,
//! name fallback, member-since date) live in `util` so this stays a plain
//! serde projection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use apicall::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed-in user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name, if set.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// ISO 8601 account creation timestamp, if available.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Decode a response body. A bare user wins; a `{ "data": { ... } }`
    /// envelope is unwrapped only when the body itself is not a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if the body is not a user object.
    pub fn from_response(body: Value) -> Result<Self, ApiError> {
        let err = match Self::deserialize(&body) {
            Ok(user) => return Ok(user),
            Err(e) => e,
        };
        match body.get("data") {
            Some(inner) if inner.is_object() => Self::deserialize(inner).map_err(|e| ApiError::Parse(e.to_string())),
            _ => Err(ApiError::Parse(err.to_string())),
        }
    }

    /// Name when present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Avatar URL when present and non-empty.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref().filter(|u| !u.is_empty())
    }
}
