//! File-backed store
//!
//! All keys live in one JSON object file. The file is read once when the
//! store is opened and rewritten in full on every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

use super::KeyValueStore;

/// File name of the store inside the data directory
pub const STORE_FILE_NAME: &str = "store.json";

/// Store persisted to a single JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in `dir`, creating nothing until the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store file cannot be read or parsed.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        Self::open_file(dir.join(STORE_FILE_NAME))
    }

    /// Opens the store at an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store file cannot be read or parsed.
    pub fn open_file(path: PathBuf) -> StoreResult<Self> {
        let _span = crate::trace_operation_debug!(
            crate::tracing::span_names::STORE_LOAD,
            path = %path.display()
        )
        .entered();

        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                    key: STORE_FILE_NAME.to_string(),
                    reason: e.to_string(),
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(keys = values.len(), "Store opened");
        Ok(Self { path, values })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StoreResult<()> {
        let _span = crate::trace_operation_debug!(
            crate::tracing::span_names::STORE_SAVE,
            keys = self.values.len()
        )
        .entered();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory consistent with disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let Some(previous) = self.values.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.values.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
