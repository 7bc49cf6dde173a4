use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use sheetd_types::Dataset;

use crate::error::{StoreError, StoreResult};
use crate::traits::DatasetStore;

/// Dataset store backed by a single pretty-printed JSON file.
///
/// The document shape is `{"columns": [...], "records": [...]}`, stable key
/// order. The first load with no file present writes the empty dataset and
/// returns it. Saves go through a temporary file in the same directory and
/// are renamed over the target, so readers never observe a torn document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given backing file path. The file itself is
    /// not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, dataset: &Dataset) -> StoreResult<()> {
        let text = serde_json::to_string_pretty(dataset).map_err(StoreError::Serialize)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        io::Write::write_all(&mut tmp, text.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        debug!(path = %self.path.display(), bytes = text.len(), "dataset saved");
        Ok(())
    }
}

impl DatasetStore for JsonFileStore {
    fn load(&self) -> StoreResult<Dataset> {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StoreError::Parse),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let dataset = Dataset::new();
                self.write_document(&dataset)?;
                info!(path = %self.path.display(), "created empty backing document");
                Ok(dataset)
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        self.write_document(dataset)
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dataset() -> Dataset {
        let mut ds = Dataset::new();
        ds.replace_columns(vec!["a".into(), "b".into()]);
        let fields = match json!({"a": "1", "b": "2"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        ds.append_record(&fields);
        ds
    }

    #[test]
    fn first_load_creates_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        let store = JsonFileStore::new(&path);

        let ds = store.load().unwrap();
        assert_eq!(ds, Dataset::new());

        // The file now exists and holds the empty shape.
        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, json!({"columns": [], "records": []}));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("database.json"));

        let ds = sample_dataset();
        store.save(&ds).unwrap();
        assert_eq!(store.load().unwrap(), ds);
    }

    #[test]
    fn save_is_pretty_printed_with_stable_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        let store = JsonFileStore::new(&path);

        store.save(&sample_dataset()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"columns\""));
        assert!(text.find("\"columns\"").unwrap() < text.find("\"records\"").unwrap());
    }

    #[test]
    fn save_replaces_previous_contents_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("database.json"));

        store.save(&sample_dataset()).unwrap();
        store.save(&Dataset::new()).unwrap();
        assert_eq!(store.load().unwrap(), Dataset::new());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deep/database.json"));

        store.save(&Dataset::new()).unwrap();
        assert_eq!(store.load().unwrap(), Dataset::new());
    }

    #[test]
    fn corrupt_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        fs::write(&path, b"not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        match store.load() {
            Err(StoreError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_loads_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("database.json"));
        store.save(&sample_dataset()).unwrap();

        let first = serde_json::to_string(&store.load().unwrap()).unwrap();
        let second = serde_json::to_string(&store.load().unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
