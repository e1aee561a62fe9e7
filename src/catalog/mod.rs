//! Produce Catalog Domain Module
//!
//! This module contains all catalog business logic, including:
//! - Domain models (ProduceItem, seed data)
//! - Format, integrity and batch validation
//! - The in-memory catalog store and the ingestion coordinator
//! - REST API handlers

pub mod coordinator;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;
pub mod validation;

// Re-export commonly used types for convenience
pub use coordinator::IngestionCoordinator;
pub use error::CatalogError;
pub use handlers::routes;
pub use models::ProduceItem;
pub use state::{AppState, SharedState};
pub use store::CatalogStore;
