// ABOUTME: Weigh-in log: ordered weight history with append, edit, and delete
// ABOUTME: Appending also updates the weight stored on the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use tracing::{info, warn};
use vitality_core::constants::storage_keys;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::{parse_locale_decimal, validate_weight, WeighIn};

use super::{load_lenient, ProfileRepository};
use crate::storage::{load_json, save_json, SharedStore};

/// Ordered list of weigh-ins, oldest first
#[derive(Clone)]
pub struct WeighInLog {
    store: SharedStore,
    profiles: ProfileRepository,
}

fn parse_weight(raw: &str) -> AppResult<f64> {
    let weight = parse_locale_decimal(raw).ok_or_else(|| {
        AppError::invalid_input(format!("'{}' is not a weight", raw.trim())).with_resource_id("weight")
    })?;
    validate_weight(weight)
}

impl WeighInLog {
    /// Create a log over the given store
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self {
            profiles: ProfileRepository::new(store.clone()),
            store,
        }
    }

    /// All entries in insertion order
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    pub async fn list(&self) -> AppResult<Vec<WeighIn>> {
        Ok(load_lenient(self.store.as_ref(), storage_keys::WEIGH_INS)
            .await?
            .unwrap_or_default())
    }

    /// Stored entries for a read-modify-write; a malformed log is an error, never empty
    async fn load_for_update(&self) -> AppResult<Vec<WeighIn>> {
        Ok(load_json(self.store.as_ref(), storage_keys::WEIGH_INS)
            .await?
            .unwrap_or_default())
    }

    async fn store_all(&self, entries: &[WeighIn]) -> AppResult<()> {
        save_json(self.store.as_ref(), storage_keys::WEIGH_INS, &entries).await
    }

    /// Record a weight now and copy it onto the profile
    ///
    /// `raw` accepts a comma or dot decimal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unparseable text, `ValueOutOfRange` outside the
    /// accepted range, `SerializationError` when the stored log is malformed, or a
    /// storage error
    pub async fn append(&self, raw: &str) -> AppResult<WeighIn> {
        let entry = WeighIn::now(parse_weight(raw)?)?;
        let mut entries = self.load_for_update().await?;
        entries.push(entry.clone());
        self.store_all(&entries).await?;

        if !self.profiles.update_weight(raw).await? {
            warn!("No profile stored; weigh-in recorded without updating profile weight");
        }
        info!(
            weight_kg = entry.weight_kg,
            recorded_at = %entry.recorded_at,
            total = entries.len(),
            "Recorded weigh-in"
        );
        Ok(entry)
    }

    /// Change the weight of the entry at `index`, keeping its timestamp
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an index past the end, a weight validation
    /// error, or a storage error
    pub async fn edit(&self, index: usize, raw: &str) -> AppResult<WeighIn> {
        let weight_kg = parse_weight(raw)?;
        let mut entries = self.load_for_update().await?;
        let entry = entries.get_mut(index).ok_or_else(|| Self::missing(index))?;
        entry.weight_kg = weight_kg;
        let updated = entry.clone();
        self.store_all(&entries).await?;
        info!(index, weight_kg, "Edited weigh-in");
        Ok(updated)
    }

    /// Remove the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an index past the end, or a storage error
    pub async fn delete(&self, index: usize) -> AppResult<WeighIn> {
        let mut entries = self.load_for_update().await?;
        if index >= entries.len() {
            return Err(Self::missing(index));
        }
        let removed = entries.remove(index);
        self.store_all(&entries).await?;
        info!(index, remaining = entries.len(), "Deleted weigh-in");
        Ok(removed)
    }

    /// Replace the whole log
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn replace_all(&self, entries: &[WeighIn]) -> AppResult<()> {
        self.store_all(entries).await
    }

    fn missing(index: usize) -> AppError {
        AppError::not_found(format!("Weigh-in #{index}")).with_resource_id(index.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use std::sync::Arc;
    use vitality_core::errors::ErrorCode;

    fn log() -> WeighInLog {
        WeighInLog::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_append_keeps_order() {
        let log = log();
        log.append("80").await.unwrap();
        log.append("79,5").await.unwrap();
        let weights: Vec<f64> = log.list().await.unwrap().iter().map(|e| e.weight_kg).collect();
        assert_eq!(weights, vec![80.0, 79.5]);
    }

    #[tokio::test]
    async fn test_malformed_log_is_not_overwritten() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let stored = r#"[{"recorded_at":"01/01/25 08:00","weight_kg":80.0},{"recorded_at":"02/01/25 08:00","weight_kg":{}}]"#;
        store
            .set(storage_keys::WEIGH_INS, stored.to_owned())
            .await
            .unwrap();
        let log = WeighInLog::new(store.clone());

        assert!(log.list().await.unwrap().is_empty());
        let err = log.append("78").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
        assert_eq!(log.edit(0, "78").await.unwrap_err().code, ErrorCode::SerializationError);
        assert_eq!(log.delete(0).await.unwrap_err().code, ErrorCode::SerializationError);

        let raw = store.get(storage_keys::WEIGH_INS).await.unwrap();
        assert_eq!(raw.as_deref(), Some(stored));
    }

    #[tokio::test]
    async fn test_rejects_bad_weights() {
        let log = log();
        let err = log.append("abc").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        let err = log.append("301").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(log.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_and_delete_by_index() {
        let log = log();
        log.append("80").await.unwrap();
        log.append("78").await.unwrap();

        let before = log.list().await.unwrap();
        let edited = log.edit(0, "81").await.unwrap();
        assert_eq!(edited.recorded_at, before[0].recorded_at);
        assert!((edited.weight_kg - 81.0).abs() < f64::EPSILON);

        let removed = log.delete(1).await.unwrap();
        assert!((removed.weight_kg - 78.0).abs() < f64::EPSILON);
        assert_eq!(log.list().await.unwrap().len(), 1);

        let err = log.delete(5).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        let err = log.edit(1, "70").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }
}
