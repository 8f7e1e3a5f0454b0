// ABOUTME: Storage abstraction for tracker state with in-memory and JSON file backends
// ABOUTME: String key-value interface with typed JSON access layered on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Persistence layer for tracker aggregates.
//!
//! All backends implement the [`Store`] trait to provide a consistent
//! interface for the application layer. [`StoreExt`] adds typed JSON
//! accessors on top of the raw string interface.

use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Well-known keys for the tracker aggregates
pub mod keys {
    /// Daily nutrition log
    pub const NUTRITION_LOG: &str = "nutrition_log";
    /// Water tracker state
    pub const WATER_TRACKER: &str = "water_tracker";
    /// Hydration snapshots, one per water change
    pub const HYDRATION_HISTORY: &str = "hydration_history";
    /// Workout log
    pub const WORKOUT_LOG: &str = "workout_log";
    /// Body progress history
    pub const PROGRESS_HISTORY: &str = "progress_history";
    /// User profile
    pub const USER_PROFILE: &str = "user_profile";
}

/// Core storage abstraction
///
/// All storage implementations must implement this trait to provide a
/// consistent interface for the application layer. Values are opaque
/// strings; typed access goes through [`StoreExt`].
pub trait Store {
    /// Read the raw value under a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    /// Write the raw value under a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn put_raw(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the value under a key; deleting a missing key is not an
    /// error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// All stored keys in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Delete everything
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn clear(&mut self) -> AppResult<()>;
}

/// Typed JSON accessors for any [`Store`]
pub trait StoreExt: Store {
    /// Read and deserialize the value under a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored
    /// value is not valid JSON for `T`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a value under a key
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the backend cannot
    /// be written
    fn put_json<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }
}

impl<S: Store + ?Sized> StoreExt for S {}
