//! File-backed key/value storage

use crate::StoreError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// A flat string-keyed store persisted to one JSON file.
///
/// Every `set`/`remove` writes the file immediately, like a browser storage
/// API. A corrupt backing file is treated as empty rather than as an error.
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileKvStore {
    /// Open the store, loading existing entries if the file exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt store file, starting empty");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Get the raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a key and persist
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
        self.entries.insert(key.into(), value.into());
        self.save()
    }

    /// Remove a key and persist. Returns whether the key existed.
    pub fn remove(&mut self, key: &str) -> Result<bool, StoreError> {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.save()?;
        }
        Ok(existed)
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
