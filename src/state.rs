//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Handlers are stateless apart from the read-only response agent.

use std::sync::Arc;

use crate::services::scoring::ResponseAgent;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<ResponseAgent>,
}

impl AppState {
    #[must_use]
    pub fn new(agent: ResponseAgent) -> Self {
        Self { agent: Arc::new(agent) }
    }
}
