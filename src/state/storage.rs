//! Persistent key/value storage and typed stored values

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// String key/value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Store backed by a JSON object in a single file.
/// The file is re-read on every access so changes made by other processes are seen.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `storage.json` in the platform data directory
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs =
            ProjectDirs::from("io", "starter", "starter-tui").ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join("storage.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    fn modify(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_all()?;
        f(&mut entries);
        self.write_all(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

/// Process-local store, used when no data directory is available
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Typed value persisted as JSON under one key.
///
/// Reads fall back to `initial` when the key is missing or holds invalid JSON.
/// Write failures are logged and the in-memory value still changes.
pub struct Stored<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    initial: T,
    value: T,
}

impl<T> Stored<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = read_value(store.as_ref(), &key).unwrap_or_else(|| initial.clone());
        Self {
            store,
            key,
            initial,
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set(&mut self, value: T) {
        match serde_json::to_string(&value) {
            Ok(json) => {
                if let Err(e) = self.store.set(&self.key, &json) {
                    tracing::warn!("Failed to store {}: {}", self.key, e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize {}: {}", self.key, e),
        }
        self.value = value;
    }

    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Delete the stored entry and return to the initial value
    pub fn remove(&mut self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!("Failed to remove {}: {}", self.key, e);
        }
        self.value = self.initial.clone();
    }

    /// Re-read the store, picking up changes made elsewhere
    pub fn refresh(&mut self) {
        self.value =
            read_value(self.store.as_ref(), &self.key).unwrap_or_else(|| self.initial.clone());
    }
}

fn read_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid stored value for {}: {}", key, e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key, e);
            None
        }
    }
}
