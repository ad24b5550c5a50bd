//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is plain data; components wrap it in `RwSignal`s provided via
//! context so the models stay testable without a reactive runtime.

pub mod results;
pub mod submission;
