//! Catalog Store
//!
//! The authoritative in-memory collection of accepted produce. Entries are
//! only ever appended; insertion order is preserved.

use super::error::CatalogError;
use super::models::{seed_items, ProduceItem};

/// Ordered, append-only collection of [`ProduceItem`].
///
/// Codes are unique across the store, but that is upheld by callers
/// checking [`CatalogStore::exists`] before [`CatalogStore::append`].
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<ProduceItem>,
}

impl CatalogStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the startup entries
    pub fn seeded() -> Self {
        Self::from_items(seed_items())
    }

    pub fn from_items(items: Vec<ProduceItem>) -> Self {
        Self { items }
    }

    /// Returns `true` iff an entry with exactly this code is present.
    pub fn exists(&self, code: &str) -> bool {
        self.items.iter().any(|item| item.code == code)
    }

    /// Finds the entry with this code.
    pub fn lookup(&self, code: &str) -> Result<ProduceItem, CatalogError> {
        self.items
            .iter()
            .find(|item| item.code == code)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Snapshot of the current contents in insertion order.
    pub fn all(&self) -> Vec<ProduceItem> {
        self.items.clone()
    }

    /// Adds `item` at the end. The caller has already ruled out a duplicate.
    pub fn append(&mut self, item: ProduceItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
