//! Display helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting rules live here so components only wire signals to markup
//! and the rules stay testable without a browser.

pub mod initials;
pub mod member_since;
