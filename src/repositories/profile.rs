// ABOUTME: Profile repository: load, validate-and-save, and clear the single user profile
// ABOUTME: Malformed stored profiles load as absent so the engine degrades gracefully
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use tracing::info;
use vitality_core::constants::storage_keys;
use vitality_core::errors::AppResult;
use vitality_core::models::Profile;

use super::load_lenient;
use crate::storage::{save_json, SharedStore};

/// Persists the user profile
#[derive(Clone)]
pub struct ProfileRepository {
    store: SharedStore,
}

impl ProfileRepository {
    /// Create a repository over the given store
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Load the stored profile, if any
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    pub async fn load(&self) -> AppResult<Option<Profile>> {
        load_lenient(self.store.as_ref(), storage_keys::PROFILE).await
    }

    /// Validate and store the profile
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or a storage error
    pub async fn save(&self, profile: &Profile) -> AppResult<()> {
        profile.validate()?;
        save_json(self.store.as_ref(), storage_keys::PROFILE, profile).await?;
        info!(name = %profile.name, "Saved profile");
        Ok(())
    }

    /// Replace the stored weight text, when a profile exists
    ///
    /// Returns whether a profile was updated.
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn update_weight(&self, weight: &str) -> AppResult<bool> {
        let Some(mut profile) = self.load().await? else {
            return Ok(false);
        };
        weight.trim().clone_into(&mut profile.weight);
        save_json(self.store.as_ref(), storage_keys::PROFILE, &profile).await?;
        Ok(true)
    }

    /// Delete the stored profile
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(storage_keys::PROFILE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use crate::storage::KeyValueStore;
    use std::sync::Arc;
    use vitality_core::models::{ActivityProfile, Gender};

    fn sample() -> Profile {
        Profile {
            name: "Ana Souza".to_owned(),
            age: 34,
            gender: Gender::Female,
            height: "1,65".to_owned(),
            weight: "62".to_owned(),
            activity_profile: ActivityProfile::Fitness,
            ..Profile::default()
        }
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let repo = ProfileRepository::new(Arc::new(MemoryStore::new()));
        assert!(repo.load().await.unwrap().is_none());

        repo.save(&sample()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), Some(sample()));

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_profile_not_saved() {
        let repo = ProfileRepository::new(Arc::new(MemoryStore::new()));
        let mut profile = sample();
        profile.age = 5;
        assert!(repo.save(&profile).await.is_err());
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_profile_loads_as_none() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(storage_keys::PROFILE, "{not json".to_owned())
            .await
            .unwrap();
        let repo = ProfileRepository::new(store);
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_weight_requires_profile() {
        let repo = ProfileRepository::new(Arc::new(MemoryStore::new()));
        assert!(!repo.update_weight("70").await.unwrap());

        repo.save(&sample()).await.unwrap();
        assert!(repo.update_weight(" 60,5 ").await.unwrap());
        assert_eq!(repo.load().await.unwrap().unwrap().weight, "60,5");
    }
}
