//! Produce Catalog State Management

use super::coordinator::IngestionCoordinator;
use super::store::CatalogStore;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state handed to every request handler
#[derive(Debug)]
pub struct AppState {
    /// Sole owner of the catalog; all reads and writes go through it.
    pub catalog: IngestionCoordinator,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state over the seeded catalog
    pub fn new() -> Self {
        Self::with_store(CatalogStore::seeded())
    }

    pub fn with_store(store: CatalogStore) -> Self {
        tracing::info!(entries = store.len(), "catalog initialized");
        Self {
            catalog: IngestionCoordinator::new(store),
        }
    }
}
