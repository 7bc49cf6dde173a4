//! Dataset persistence for sheetd.
//!
//! The whole dataset lives in one backing document. Every operation loads it
//! fully into memory and every mutation rewrites it fully — there are no
//! partial or append writes.
//!
//! # Backends
//!
//! All backends implement the [`DatasetStore`] trait:
//!
//! - [`JsonFileStore`] — a single pretty-printed UTF-8 JSON file
//! - [`InMemoryStore`] — `RwLock`-held state for tests and embedding
//!
//! # Design Rules
//!
//! 1. A missing backing document is not an error: the first load synthesizes
//!    the empty dataset, persists it, and returns it.
//! 2. Every other read/parse failure propagates, never silently recovered.
//! 3. Saves replace the document in full, via write-to-temp-then-rename so a
//!    crash never leaves a torn file.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::DatasetStore;
