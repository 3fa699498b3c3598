// ABOUTME: Nutritionist directory: contacts with their recommendations and attachments
// ABOUTME: Records are addressed by their UUID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use tracing::info;
use uuid::Uuid;
use vitality_core::constants::storage_keys;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::{Attachment, Nutritionist};

use super::load_lenient;
use crate::storage::{load_json, save_json, SharedStore};

/// Stored list of nutritionists
#[derive(Clone)]
pub struct NutritionistDirectory {
    store: SharedStore,
}

impl NutritionistDirectory {
    /// Create a directory over the given store
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All nutritionists in insertion order
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn list(&self) -> AppResult<Vec<Nutritionist>> {
        Ok(load_lenient(self.store.as_ref(), storage_keys::NUTRITIONISTS)
            .await?
            .unwrap_or_default())
    }

    /// Stored records for a read-modify-write; a malformed directory is an error
    async fn load_for_update(&self) -> AppResult<Vec<Nutritionist>> {
        Ok(load_json(self.store.as_ref(), storage_keys::NUTRITIONISTS)
            .await?
            .unwrap_or_default())
    }

    /// Replace the whole directory
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn replace_all(&self, records: &[Nutritionist]) -> AppResult<()> {
        save_json(self.store.as_ref(), storage_keys::NUTRITIONISTS, &records).await
    }

    /// Add a nutritionist
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or a storage error
    pub async fn add(&self, name: &str, email: &str, phone: &str) -> AppResult<Nutritionist> {
        let record = Nutritionist::new(name, email.trim(), phone.trim())?;
        let mut records = self.load_for_update().await?;
        records.push(record.clone());
        self.replace_all(&records).await?;
        info!(id = %record.id, "Added nutritionist");
        Ok(record)
    }

    /// Append a recommendation to a nutritionist
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for blank text, `ResourceNotFound` for an
    /// unknown id, or a storage error
    pub async fn add_recommendation(&self, id: Uuid, text: &str) -> AppResult<Nutritionist> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::missing_field("recommendation"));
        }
        self.update(id, |record| record.recommendations.push(text.to_owned()))
            .await
    }

    /// Attach a file reference to a nutritionist
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a storage error
    pub async fn attach(&self, id: Uuid, attachment: Attachment) -> AppResult<Nutritionist> {
        self.update(id, |record| record.attachments.push(attachment))
            .await
    }

    async fn update(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Nutritionist) + Send,
    ) -> AppResult<Nutritionist> {
        let mut records = self.load_for_update().await?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| AppError::not_found(format!("Nutritionist {id}")).with_resource_id(id.to_string()))?;
        apply(record);
        let updated = record.clone();
        self.replace_all(&records).await?;
        info!(%id, "Updated nutritionist");
        Ok(updated)
    }
}
