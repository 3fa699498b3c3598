// ABOUTME: Repositories for persisted records on top of the key-value store
// ABOUTME: Profile, weigh-in log, and nutritionist directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Repositories
//!
//! Each repository owns one storage key and the JSON shape stored under it. They
//! share a [`SharedStore`](crate::storage::SharedStore) handle, so building all three
//! over the same store is cheap.

/// Nutritionist contacts, recommendations, and attachments
pub mod nutritionists;
/// The single user profile
pub mod profile;
/// Weight history
pub mod weigh_ins;

pub use nutritionists::NutritionistDirectory;
pub use profile::ProfileRepository;
pub use weigh_ins::WeighInLog;

use serde::de::DeserializeOwned;
use tracing::warn;
use vitality_core::errors::{AppResult, ErrorCode};

use crate::storage::{load_json, KeyValueStore};

/// Load a record, treating malformed JSON as absent
///
/// Storage failures still propagate; only decoding failures are downgraded.
pub(crate) async fn load_lenient<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    match load_json(store, key).await {
        Ok(value) => Ok(value),
        Err(e) if e.code == ErrorCode::SerializationError => {
            warn!(key, error = %e, "Ignoring malformed stored record");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
