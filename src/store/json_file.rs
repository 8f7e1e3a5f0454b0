// ABOUTME: JSON file storage backend with atomic writes
// ABOUTME: Loads the whole map on open and rewrites it through a temp file on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! JSON file storage backend.

use super::Store;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistent store backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at the given path, loading existing data.
    ///
    /// A missing file starts the store empty; it is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or
    /// parsed
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|err| {
                AppError::storage(format!("failed to read {}: {err}", path.display()))
            })?;
            serde_json::from_str(&raw).map_err(|err| {
                AppError::storage(format!("failed to parse {}: {err}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = values.len(), "opened json store");
        Ok(Self { path, values })
    }

    /// Open the store at the default per-user data path
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined or the
    /// existing file cannot be read
    pub fn open_default() -> AppResult<Self> {
        Self::open(default_data_path()?)
    }

    /// File the store persists to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a temp file next to the target, then rename over it
    fn persist(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                AppError::storage(format!("failed to create {}: {err}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|err| {
            AppError::storage(format!("failed to write {}: {err}", temp_path.display()))
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|err| {
            AppError::storage(format!("failed to replace {}: {err}", self.path.display()))
        })?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.values.clear();
        self.persist()
    }
}

/// Default location of the store file under the user's home directory
///
/// # Errors
///
/// Returns an error if no home directory can be determined
pub fn default_data_path() -> AppResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::config("could not determine home directory for data storage"))?;
    Ok(home.join(".fittrack").join("store.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();

        assert!(store.keys().unwrap().is_empty());
        // Nothing written until the first mutation.
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put_raw("water", "5").unwrap();
        store.put_raw("score", "84").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get_raw("water").unwrap().as_deref(), Some("5"));
        assert_eq!(reopened.keys().unwrap(), vec!["score", "water"]);
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put_raw("a", "1").unwrap();
        store.put_raw("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get_raw("a").unwrap().is_none());
        assert_eq!(reopened.get_raw("b").unwrap().as_deref(), Some("2"));

        let mut store = reopened;
        store.clear().unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.keys().unwrap().is_empty());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put_raw("key", "value").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        assert!(JsonFileStore::open(&path).is_err());
    }
}
