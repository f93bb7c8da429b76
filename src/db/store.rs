//! Flat JSON document storage.
//!
//! Each collection is one JSON array document, rewritten wholesale on every
//! save. There is no indexing and no locking across processes; every caller
//! pays a full read-parse-rewrite cycle.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::log_warn;

const ENABLE_LOGS: bool = true;

/// The four persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Ideas,
    Comments,
    Collaborations,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Students,
        Collection::Ideas,
        Collection::Comments,
        Collection::Collaborations,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Students => "students.json",
            Collection::Ideas => "ideas.json",
            Collection::Comments => "comments.json",
            Collection::Collaborations => "collaborations.json",
        }
    }
}

/// Load/save of a whole collection document.
///
/// `load` never fails on a bad document: an absent or unparseable document is
/// treated as an empty collection. This matches the recovery model of the
/// rest of the layer, where a corrupt file degrades to empty rather than
/// poisoning every request.
pub trait RecordStore {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>>;
    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()>;
}

/// Production store: one pretty-printed JSON file per collection.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create the data directory and seed missing collection documents
    /// with empty arrays.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).with_context(|| {
            format!("failed to create data directory {}", data_dir.display())
        })?;

        let store = Self { data_dir };
        for collection in Collection::ALL {
            let path = store.path(collection);
            if !path.exists() {
                fs::write(&path, "[]")
                    .with_context(|| format!("failed to seed {}", path.display()))?;
            }
        }

        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

impl RecordStore for FileStore {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let path = self.path(collection);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return Ok(Vec::new()),
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(err) => {
                log_warn!(
                    "treating unparseable {} as empty: {err}",
                    collection.file_name()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(records)
            .with_context(|| format!("failed to serialize {}", collection.file_name()))?;

        // Write-then-rename so a reader never observes a partial document.
        let path = self.path(collection);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serialized)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("failed to replace {}", path.display()))?;

        Ok(())
    }
}

/// In-memory store for tests: serialized documents keyed by collection.
///
/// Documents are held as JSON text rather than typed records so that the
/// serialize/deserialize path under test is identical to [`FileStore`].
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<Collection, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let documents = self
            .documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let contents = match documents.get(&collection) {
            Some(contents) => contents,
            None => return Ok(Vec::new()),
        };

        Ok(serde_json::from_str(contents).unwrap_or_default())
    }

    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let serialized = serde_json::to_string(records)
            .with_context(|| format!("failed to serialize {}", collection.file_name()))?;

        let mut documents = self
            .documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        documents.insert(collection, serialized);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        value: i64,
    }

    fn record(id: &str, value: i64) -> Record {
        Record {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn new_store_seeds_empty_documents() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        for collection in Collection::ALL {
            let contents =
                std::fs::read_to_string(store.data_dir().join(collection.file_name())).unwrap();
            assert_eq!(contents, "[]");
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store
            .save(Collection::Ideas, &[record("a", 1), record("b", 2)])
            .unwrap();
        let loaded: Vec<Record> = store.load(Collection::Ideas).unwrap();

        assert_eq!(loaded, vec![record("a", 1), record("b", 2)]);
    }

    #[test]
    fn missing_document_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join("comments.json")).unwrap();

        let loaded: Vec<Record> = store.load(Collection::Comments).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_document_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        std::fs::write(dir.path().join("students.json"), "{not json").unwrap();

        let loaded: Vec<Record> = store.load(Collection::Students).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.save(Collection::Ideas, &[record("a", 1)]).unwrap();

        assert!(!dir.path().join("ideas.json.tmp").exists());
    }

    #[test]
    fn memory_store_round_trips_and_defaults_to_empty() {
        let store = MemoryStore::new();

        let empty: Vec<Record> = store.load(Collection::Students).unwrap();
        assert!(empty.is_empty());

        store.save(Collection::Students, &[record("s", 7)]).unwrap();
        let loaded: Vec<Record> = store.load(Collection::Students).unwrap();
        assert_eq!(loaded, vec![record("s", 7)]);
    }
}
