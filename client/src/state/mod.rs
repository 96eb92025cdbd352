//! Client-side state models.
//!
//! DESIGN
//! ======
//! State structs are plain data with pure transition methods; components wrap
//! them in `RwSignal` so the transitions stay testable without a reactive
//! runtime.

pub mod user_details;
