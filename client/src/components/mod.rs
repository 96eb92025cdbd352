//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their local signals and delegate transitions and formatting
//! to `state` and `util`.

pub mod user_details;
