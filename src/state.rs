//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds immutable process-wide configuration and the GraphQL backend. There
//! is no mutable state: every request builds its feed from scratch.

use std::sync::Arc;

use crate::config::GuestbookConfig;
use crate::graphql::GraphQlBackend;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; both fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GuestbookConfig>,
    pub backend: Arc<dyn GraphQlBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(config: GuestbookConfig, backend: Arc<dyn GraphQlBackend>) -> Self {
        Self { config: Arc::new(config), backend }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
