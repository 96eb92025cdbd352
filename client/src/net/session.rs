//! Browser-context session accessor.
//!
//! Reads the provider session cookie from `document.cookie` on every call so
//! a token refreshed by the provider is picked up without reloading.

use apicall::{Session, SessionAccessor};

/// Session accessor for hydrated code. On the server build it always reports
/// no session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl SessionAccessor for BrowserSession {
    async fn current_session(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
            apicall::session_from_cookie_header(&cookies)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
