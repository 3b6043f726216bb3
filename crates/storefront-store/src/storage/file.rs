//! # File-Backed Store
//!
//! The desktop counterpart of browser local storage: one JSON document on
//! disk holding every key.
//!
//! ## File Layout
//! ```json
//! {
//!   "updatedAt": "2026-10-18T09:30:00Z",
//!   "entries": {
//!     "cart": "[{\"id\":1,\"name\":\"Lukather\",...,\"quantity\":2}]"
//!   }
//! }
//! ```
//!
//! Values stay opaque strings, exactly as the manager hands them over.
//!
//! ## Write Path
//! Every `set`/`remove` rewrites the whole document to a sibling `.tmp` file
//! and renames it over the original, so a crash mid-write leaves the previous
//! version intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};

/// On-disk document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Key-value store persisted to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    document: StoreDocument,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// ## Behavior
    /// - Missing file: starts empty; the file is created on the first write
    /// - Existing file: parsed in full
    ///
    /// ## Returns
    /// * `Err(StoreError::Io)` - The file exists but can't be read
    /// * `Err(StoreError::CorruptStore)` - The file isn't a store document
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if !path.exists() {
            info!(path = %path.display(), "Store file not found, starting empty");
            return Ok(FileStore {
                path,
                document: StoreDocument::default(),
            });
        }

        let raw = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let document: StoreDocument =
            serde_json::from_str(&raw).map_err(|e| StoreError::CorruptStore {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        info!(
            path = %path.display(),
            keys = document.entries.len(),
            "Store file loaded"
        );

        Ok(FileStore { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the file was last written by this or an earlier store.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.document.updated_at
    }

    fn save(&mut self) -> StoreResult<()> {
        self.document.updated_at = Some(Utc::now());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&self.document)?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), "Store file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.document.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.document
            .entries
            .insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.document.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();

        assert_eq!(store.get("cart").unwrap(), None);
        assert!(store.updated_at().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("cart", r#"[{"id":1}]"#).unwrap();
        assert!(path.exists());
        assert!(store.updated_at().is_some());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("cart").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        assert_eq!(reopened.updated_at(), store.updated_at());
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("cart", "[]").unwrap();
        store.set("theme", "dark").unwrap();
        store.remove("cart").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("cart").unwrap(), None);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::CorruptStore { .. }));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("cart", "[]").unwrap();

        assert!(!path.with_extension("tmp").exists());
    }
}
