//! Ingestion Coordinator
//!
//! Owns the catalog store and is the only path by which it grows. A batch is
//! validated as a whole, then merged item by item; duplicates are skipped.

use super::error::CatalogError;
use super::helpers::format_batch_summary;
use super::models::ProduceItem;
use super::store::CatalogStore;
use super::validation::validate_batch;
use tokio::sync::RwLock;

/// Validates `batch` and appends its new items to `store`.
///
/// Each item is checked against the store as it stands after the items before
/// it were appended, so a code repeated within one batch is kept once.
///
/// Returns the full catalog after the merge, or:
/// * [`CatalogError::BadFormat`] if any item fails validation (store untouched)
/// * [`CatalogError::AllDuplicates`] if no item was new (store untouched)
pub fn ingest_into(
    store: &mut CatalogStore,
    batch: Vec<ProduceItem>,
) -> Result<Vec<ProduceItem>, CatalogError> {
    if !validate_batch(&batch) {
        return Err(CatalogError::BadFormat);
    }

    let submitted = batch.len();
    let mut duplicates = 0;
    for item in batch {
        if store.exists(&item.code) {
            tracing::info!(code = %item.code, name = %item.name, "item already exists, skipping");
            duplicates += 1;
        } else {
            store.append(item);
        }
    }

    if duplicates == submitted {
        return Err(CatalogError::AllDuplicates);
    }

    tracing::info!(
        accepted = submitted - duplicates,
        skipped = duplicates,
        "batch merged into catalog"
    );
    Ok(store.all())
}

/// Shared front for the catalog store.
///
/// Holding the write lock across validate, check and append makes each
/// ingestion atomic with respect to every other request.
#[derive(Debug, Default)]
pub struct IngestionCoordinator {
    store: RwLock<CatalogStore>,
}

impl IngestionCoordinator {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Coordinator over the startup entries
    pub fn seeded() -> Self {
        Self::new(CatalogStore::seeded())
    }

    /// Snapshot of the catalog in insertion order
    pub async fn all(&self) -> Vec<ProduceItem> {
        self.store.read().await.all()
    }

    pub async fn lookup(&self, code: &str) -> Result<ProduceItem, CatalogError> {
        self.store.read().await.lookup(code)
    }

    pub async fn exists(&self, code: &str) -> bool {
        self.store.read().await.exists(code)
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Runs [`ingest_into`] under the write lock.
    pub async fn ingest(&self, batch: Vec<ProduceItem>) -> Result<Vec<ProduceItem>, CatalogError> {
        tracing::debug!(items = %format_batch_summary(&batch), "ingesting batch");
        let mut store = self.store.write().await;
        ingest_into(&mut store, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn kiwi() -> ProduceItem {
        ProduceItem::new("AAAA-BBBB-CCCC-DDDD", "Kiwi", 1.50)
    }

    fn lettuce() -> ProduceItem {
        ProduceItem::new("A12T-4GH7-QPL9-3N4M", "Lettuce", 3.46)
    }

    #[test]
    fn single_new_item_is_accepted_and_retrievable() {
        let mut store = CatalogStore::seeded();
        let catalog = ingest_into(&mut store, vec![kiwi()]).unwrap();

        assert_eq!(catalog.len(), 5);
        assert_eq!(store.lookup("AAAA-BBBB-CCCC-DDDD").unwrap(), kiwi());
    }

    #[test]
    fn all_duplicates_leave_catalog_unchanged() {
        let mut store = CatalogStore::seeded();
        let before = store.len();

        let result = ingest_into(&mut store, vec![lettuce()]);

        assert!(matches!(result, Err(CatalogError::AllDuplicates)));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn mixed_batch_adds_only_the_new_item() {
        let mut store = CatalogStore::seeded();
        let before = store.len();

        let catalog = ingest_into(&mut store, vec![kiwi(), lettuce()]).unwrap();

        assert_eq!(catalog.len(), before + 1);
        assert_eq!(
            catalog.iter().filter(|i| i.code == lettuce().code).count(),
            1
        );
        assert_eq!(catalog.last(), Some(&kiwi()));
    }

    #[test]
    fn bad_format_rejects_whole_batch() {
        let mut store = CatalogStore::seeded();
        let before = store.len();
        let bad = ProduceItem::new("EEEE-FFFF-GGGG", "Mango", 2.0);

        let result = ingest_into(&mut store, vec![kiwi(), bad]);

        assert!(matches!(result, Err(CatalogError::BadFormat)));
        assert_eq!(store.len(), before);
        assert!(!store.exists("AAAA-BBBB-CCCC-DDDD"));
    }

    #[test]
    fn repeated_code_within_batch_is_kept_once() {
        let mut store = CatalogStore::new();
        let other_kiwi = ProduceItem::new("AAAA-BBBB-CCCC-DDDD", "GoldKiwi", 2.10);

        let catalog = ingest_into(&mut store, vec![kiwi(), other_kiwi]).unwrap();

        assert_eq!(catalog, vec![kiwi()]);
    }

    #[test]
    fn empty_batch_counts_as_all_duplicates() {
        let mut store = CatalogStore::seeded();
        let result = ingest_into(&mut store, Vec::new());
        assert!(matches!(result, Err(CatalogError::AllDuplicates)));
    }

    #[test]
    fn accepted_items_round_trip_through_lookup() {
        let mut store = CatalogStore::new();
        let items = vec![
            kiwi(),
            ProduceItem::new("EEEE-FFFF-GGGG-HHHH", "Mango", 2.0),
            ProduceItem::new("1111-2222-3333-4444", "Plum", 0.45),
        ];

        ingest_into(&mut store, items.clone()).unwrap();

        for item in items {
            assert_eq!(store.lookup(&item.code).unwrap(), item);
        }
    }

    #[tokio::test]
    async fn concurrent_ingestion_of_same_item_inserts_once() {
        let coordinator = Arc::new(IngestionCoordinator::seeded());
        let before = coordinator.len().await;

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let coordinator = Arc::clone(&coordinator);
                tokio::spawn(async move { coordinator.ingest(vec![kiwi()]).await })
            })
            .collect();

        let mut accepted = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(CatalogError::AllDuplicates) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(coordinator.len().await, before + 1);
        assert!(coordinator.exists("AAAA-BBBB-CCCC-DDDD").await);
    }
}
