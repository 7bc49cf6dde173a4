use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use sheetd_types::Dataset;

use crate::error::StoreResult;
use crate::traits::DatasetStore;

/// In-memory dataset store for tests and embedding.
///
/// Mirrors the file store's first-access behavior: a load before any save
/// materializes the empty dataset. Load and save counters let tests assert
/// that a request path performed no store access at all.
pub struct InMemoryStore {
    dataset: RwLock<Option<Dataset>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl InMemoryStore {
    /// Create an empty store; the first load synthesizes the empty dataset.
    pub fn new() -> Self {
        Self {
            dataset: RwLock::new(None),
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    /// Create a store pre-seeded with a dataset.
    pub fn with_dataset(dataset: Dataset) -> Self {
        let store = Self::new();
        *store.dataset.write().expect("lock poisoned") = Some(dataset);
        store
    }

    /// Current contents, without counting as a load. `None` before first use.
    pub fn snapshot(&self) -> Option<Dataset> {
        self.dataset.read().expect("lock poisoned").clone()
    }

    /// Number of `load` calls observed.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of `save` calls observed.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetStore for InMemoryStore {
    fn load(&self) -> StoreResult<Dataset> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.dataset.write().expect("lock poisoned");
        Ok(guard.get_or_insert_with(Dataset::new).clone())
    }

    fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.dataset.write().expect("lock poisoned") = Some(dataset.clone());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("loads", &self.load_count())
            .field("saves", &self.save_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_materializes_empty_dataset() {
        let store = InMemoryStore::new();
        assert!(store.snapshot().is_none());

        let ds = store.load().unwrap();
        assert_eq!(ds, Dataset::new());
        assert_eq!(store.snapshot(), Some(Dataset::new()));
    }

    #[test]
    fn save_replaces_contents() {
        let store = InMemoryStore::new();
        let mut ds = Dataset::new();
        ds.replace_columns(vec!["a".into()]);

        store.save(&ds).unwrap();
        assert_eq!(store.load().unwrap(), ds);
    }

    #[test]
    fn counters_track_access() {
        let store = InMemoryStore::new();
        assert_eq!((store.load_count(), store.save_count()), (0, 0));

        store.load().unwrap();
        store.save(&Dataset::new()).unwrap();
        store.load().unwrap();
        assert_eq!((store.load_count(), store.save_count()), (2, 1));
    }
}
