use sheetd_types::Dataset;

use crate::error::StoreResult;

/// Full-document dataset store.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the complete dataset; a missing backing document yields
///   the empty dataset, which is persisted before it is returned.
/// - `save` replaces the backing document in full. No partial writes.
/// - Read/parse failures other than "document absent" are propagated, never
///   silently recovered.
/// - The store never applies consistency rules — column/record validation
///   belongs to the caller.
pub trait DatasetStore: Send + Sync {
    /// Load the complete dataset, creating the empty default on first access.
    fn load(&self) -> StoreResult<Dataset>;

    /// Persist the complete dataset, replacing any previous contents.
    fn save(&self, dataset: &Dataset) -> StoreResult<()>;
}
