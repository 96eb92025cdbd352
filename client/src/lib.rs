//! # client
//!
//! Leptos + WASM front end: login page, home page with the user-details
//! widget, and the browser-side API facade.
//!
//! Built twice: with `ssr` for server rendering inside the `server` crate,
//! and with `hydrate` for the browser bundle. Network calls and cookie access
//! only exist in the `hydrate` build; SSR paths degrade to stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
