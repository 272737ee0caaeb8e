//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the backend seam and the parsed configuration; there is no shared
//! mutable state.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::upstream::StarsBackend;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn StarsBackend>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn StarsBackend>, config: AppConfig) -> Self {
        Self { backend, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
