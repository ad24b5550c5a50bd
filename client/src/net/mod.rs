//! Networking for the assessment exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` moves bytes to and from `/process`; `assessment` owns the submit
//! flow built on top of it.

pub mod api;
pub mod assessment;
