// --------------------------------------------------
// Local key/value persistence.
//
// Every key holds one JSON document, the same way the
// site used to keep its state in browser storage:
// - athletis-classes       -> class catalog
// - athletis-reservations  -> generated reservations
// - personal-events        -> user calendar entries
// --------------------------------------------------

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use thiserror::Error;
use uuid::Uuid;

pub const CLASSES_KEY: &str = "athletis-classes";
pub const RESERVATIONS_KEY: &str = "athletis-reservations";
pub const PERSONAL_EVENTS_KEY: &str = "personal-events";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    #[error("storage encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key under `dir`.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        // one tmp file per write: concurrent writers of a key never share it
        let tmp_path = self
            .dir
            .join(format!("{key}.json.{}.tmp", Uuid::new_v4().simple()));

        fs::create_dir_all(&self.dir)?;

        // write then rename so readers never see a half-written document
        fs::write(&tmp_path, value)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_reports_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data"));

        assert_eq!(store.get(CLASSES_KEY).unwrap(), None);

        store.set(CLASSES_KEY, "[1,2,3]").unwrap();
        assert_eq!(store.get(CLASSES_KEY).unwrap().as_deref(), Some("[1,2,3]"));
        assert!(store.dir().join("athletis-classes.json").exists());
        let leftovers = fs::read_dir(store.dir()).unwrap().count();
        assert_eq!(leftovers, 1);

        store.set(CLASSES_KEY, "[]").unwrap();
        assert_eq!(store.get(CLASSES_KEY).unwrap().as_deref(), Some("[]"));

        store.remove(CLASSES_KEY).unwrap();
        store.remove(CLASSES_KEY).unwrap();
        assert_eq!(store.get(CLASSES_KEY).unwrap(), None);
    }

    #[test]
    fn concurrent_writes_to_one_key_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(JsonFileStore::new(dir.path()));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..200)
                        .filter(|i| store.set(CLASSES_KEY, &format!("[{t},{i}]")).is_err())
                        .count()
                })
            })
            .collect();
        let failures: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(failures, 0);

        // last write wins with a complete document, no tmp files left behind
        let text = store.get(CLASSES_KEY).unwrap().unwrap();
        let doc: Vec<u32> = serde_json::from_str(&text).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(fs::read_dir(store.dir()).unwrap().count(), 1);
    }

    #[test]
    fn memory_store_keeps_keys_apart() {
        let store = MemoryStore::new();
        store.set(RESERVATIONS_KEY, "a").unwrap();
        store.set(PERSONAL_EVENTS_KEY, "b").unwrap();

        assert_eq!(store.get(RESERVATIONS_KEY).unwrap().as_deref(), Some("a"));
        assert_eq!(store.get(PERSONAL_EVENTS_KEY).unwrap().as_deref(), Some("b"));
        assert_eq!(store.get(CLASSES_KEY).unwrap(), None);
    }
}
