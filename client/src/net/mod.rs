//! Networking modules for the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser-context facade over `apicall`, `session` reads the
//! provider session cookie, and `types` defines the response schema.

pub mod api;
pub mod session;
pub mod types;
