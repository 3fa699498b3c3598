// ABOUTME: Storage abstraction: an async key-value store over string keys and JSON text
// ABOUTME: Pluggable backends (in-memory, file-per-key) plus typed JSON helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

/// One JSON file per key under a data directory
pub mod file;
/// In-memory store for tests and ephemeral sessions
pub mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use vitality_core::errors::{AppError, AppResult};

use self::file::FileStore;
use self::memory::MemoryStore;

/// Key-value store holding JSON text under string keys
///
/// Values are opaque to the store; repositories own the record format.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete `key`; deleting an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Delete every key
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    async fn clear(&self) -> AppResult<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Shared handle to any store
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Keys are limited to ASCII letters, digits, `_` and `-`
///
/// # Errors
///
/// Returns `InvalidInput` for an empty key or one with other characters
pub fn validate_key(key: &str) -> AppResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("Invalid storage key '{key}'")).with_resource_id(key))
    }
}

/// Read and deserialize the record under `key`
///
/// # Errors
///
/// Returns a storage error if the read fails, or a serialization error if the stored
/// text is not a valid `T`
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get(key).await? {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

/// Serialize and store `value` under `key`
///
/// # Errors
///
/// Returns a serialization or storage error
pub async fn save_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let text = serde_json::to_string(value)?;
    store.set(key, text).await
}

/// Backend selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Keep everything in memory
    Memory,
    /// One JSON file per key under a directory
    File(PathBuf),
}

/// Create a store for the configured backend
///
/// # Errors
///
/// Returns a storage error if the data directory cannot be created
pub async fn open_store(config: &StorageConfig) -> AppResult<SharedStore> {
    let store: SharedStore = match config {
        StorageConfig::Memory => Arc::new(MemoryStore::new()),
        StorageConfig::File(dir) => Arc::new(FileStore::open(dir.clone()).await?),
    };
    info!(backend = store.backend_name(), "Opened key-value store");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_validation() {
        assert!(validate_key("weigh_ins").is_ok());
        assert!(validate_key("profile-2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("with space").is_err());
    }
}
