// ABOUTME: In-memory key-value store guarded by an async RwLock
// ABOUTME: Used by tests and as an ephemeral backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use vitality_core::errors::AppResult;

use super::{validate_key, KeyValueStore};
use crate::logging::AppLogger;

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        validate_key(key)?;
        AppLogger::log_storage_operation("set", key, self.backend_name(), value.len());
        self.entries.write().await.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        AppLogger::log_storage_operation("remove", key, self.backend_name(), 0);
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        drop(entries);
        tracing::info!(removed, "Cleared in-memory store");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("profile").await.unwrap(), None);

        store.set("profile", "{}".to_owned()).await.unwrap();
        assert_eq!(store.get("profile").await.unwrap().as_deref(), Some("{}"));

        store.remove("profile").await.unwrap();
        store.remove("profile").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("weigh_ins", "[]".to_owned()).await.unwrap();
        assert_eq!(other.len().await, 1);
        other.clear().await.unwrap();
        assert!(store.is_empty().await);
    }
}
