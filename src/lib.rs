//! # bias-survey
//!
//! Axum server for the bias assessment survey. Serves the Leptos survey page
//! and the `/process` endpoint that turns four self-reported scores into an
//! adjusted response style and a user group.

#![recursion_limit = "256"]

pub mod config;
pub mod routes;
pub mod services;
pub mod state;
