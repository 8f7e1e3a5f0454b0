// ABOUTME: In-memory storage backend for tests and ephemeral sessions
// ABOUTME: Keeps values in a BTreeMap so key listings come out sorted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! In-memory storage backend.

use super::Store;
use crate::errors::AppResult;
use std::collections::BTreeMap;

/// Volatile store backed by a sorted map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Store for MemoryStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.values.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.put_raw("a", "1").unwrap();
        store.put_raw("b", "2").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_raw("a").unwrap().as_deref(), Some("1"));

        store.remove("a").unwrap();
        assert!(store.get_raw("a").unwrap().is_none());

        // Removing a missing key is fine.
        store.remove("a").unwrap();
    }

    #[test]
    fn test_keys_sorted() {
        let mut store = MemoryStore::new();
        store.put_raw("zebra", "1").unwrap();
        store.put_raw("apple", "2").unwrap();
        store.put_raw("mango", "3").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_overwrite_and_clear() {
        let mut store = MemoryStore::new();
        store.put_raw("key", "old").unwrap();
        store.put_raw("key", "new").unwrap();
        assert_eq!(store.get_raw("key").unwrap().as_deref(), Some("new"));

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
