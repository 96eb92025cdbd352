//! State machine behind the user-details widget.
//!
//! ```text
//! idle ──begin──> loading ──finish(Ok)──> loaded
//!                    │                       │
//!                    └──finish(Err)──> errored
//! loaded | errored ──begin──> loading
//! ```
//!
//! Triggers may overlap. Each `begin` issues a new sequence number and only
//! the `finish` carrying the latest one is applied, so a slow early response
//! can never overwrite a newer one.

#[cfg(test)]
#[path = "user_details_test.rs"]
mod user_details_test;

use std::future::Future;

use apicall::ApiError;

use crate::net::types::User;

/// User-facing message shown for any fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch user details";

/// Observable widget state plus the in-flight request sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDetailsState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
    request_seq: u64,
}

impl UserDetailsState {
    /// Enter `loading`: clear the error, keep any previous user, and return
    /// the sequence number the eventual result must present.
    pub fn begin(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when `seq`
    /// belongs to a superseded request.
    pub fn finish<E>(&mut self, seq: u64, result: Result<User, E>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        match result {
            Ok(user) => self.user = Some(user),
            Err(_) => self.error = Some(FETCH_FAILED_MESSAGE.to_owned()),
        }
        self.loading = false;
        true
    }

    /// The fetch prompt is shown only before anything has been loaded.
    #[must_use]
    pub fn shows_prompt(&self) -> bool {
        self.user.is_none() && !self.loading
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.loading {
            "Loading..."
        } else if self.user.is_some() {
            "Refresh User Details"
        } else {
            "Fetch User Details"
        }
    }
}

/// A settled fetch, tagged with the sequence number it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    seq: u64,
    result: Result<User, ApiError>,
}

impl FetchOutcome {
    /// Apply to `state`; see [`UserDetailsState::finish`].
    pub fn apply(self, state: &mut UserDetailsState) -> bool {
        state.finish(self.seq, self.result)
    }
}

/// Await `fetch` for request `seq`, logging a failure before it is reduced to
/// [`FETCH_FAILED_MESSAGE`].
pub async fn settle_fetch<F>(seq: u64, fetch: F) -> FetchOutcome
where
    F: Future<Output = Result<User, ApiError>>,
{
    let result = fetch.await;
    if let Err(e) = &result {
        log::error!("Error fetching user: {e}");
    }
    FetchOutcome { seq, result }
}
