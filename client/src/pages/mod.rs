//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates interactive pieces to
//! `components`.

pub mod error;
pub mod home;
pub mod login;
