// ABOUTME: Backup and data reset: JSON snapshots of every record and a CSV weight export
// ABOUTME: Snapshots are versioned so older files are accepted and newer ones rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Backup
//!
//! A [`Snapshot`] captures the profile, the weigh-in log, and the nutritionist
//! directory in one JSON document. Importing replaces everything in the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tokio::fs;
use tracing::info;
use vitality_core::constants::storage_keys;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::{Nutritionist, Profile, WeighIn};
use vitality_intelligence::metrics::weight_history_series;

use crate::repositories::{NutritionistDirectory, ProfileRepository, WeighInLog};
use crate::storage::SharedStore;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Header row of the weigh-in CSV export
pub const CSV_HEADER: &str = "recorded_at,weight_kg,bmi";

/// Every persisted record at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version
    pub version: u32,
    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,
    /// Stored profile, if any
    pub profile: Option<Profile>,
    /// Weight history
    #[serde(default)]
    pub weigh_ins: Vec<WeighIn>,
    /// Nutritionist directory
    #[serde(default)]
    pub nutritionists: Vec<Nutritionist>,
}

/// Read every record into a snapshot
///
/// # Errors
///
/// Returns a storage error
pub async fn export_snapshot(store: &SharedStore) -> AppResult<Snapshot> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        exported_at: Utc::now(),
        profile: ProfileRepository::new(store.clone()).load().await?,
        weigh_ins: WeighInLog::new(store.clone()).list().await?,
        nutritionists: NutritionistDirectory::new(store.clone()).list().await?,
    };
    info!(
        has_profile = snapshot.profile.is_some(),
        weigh_ins = snapshot.weigh_ins.len(),
        nutritionists = snapshot.nutritionists.len(),
        "Exported snapshot"
    );
    Ok(snapshot)
}

/// Replace every record with the snapshot contents
///
/// The profile is restored as stored, without re-running form validation. All
/// records are serialized before anything is written, and each key is then
/// overwritten in place, so a failed write leaves the remaining keys at their
/// previous contents instead of empty.
///
/// # Errors
///
/// Returns `InvalidInput` for a snapshot from a newer format, or a storage error
pub async fn import_snapshot(store: &SharedStore, snapshot: &Snapshot) -> AppResult<()> {
    if snapshot.version > SNAPSHOT_VERSION {
        return Err(AppError::invalid_input(format!(
            "Snapshot version {} is newer than supported version {SNAPSHOT_VERSION}",
            snapshot.version
        ))
        .with_resource_id("version"));
    }

    let weigh_ins = serde_json::to_string(&snapshot.weigh_ins)?;
    let nutritionists = serde_json::to_string(&snapshot.nutritionists)?;
    let profile = snapshot
        .profile
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    store.set(storage_keys::WEIGH_INS, weigh_ins).await?;
    store.set(storage_keys::NUTRITIONISTS, nutritionists).await?;
    match profile {
        Some(text) => store.set(storage_keys::PROFILE, text).await?,
        None => store.remove(storage_keys::PROFILE).await?,
    }

    info!(
        exported_at = %snapshot.exported_at,
        weigh_ins = snapshot.weigh_ins.len(),
        nutritionists = snapshot.nutritionists.len(),
        "Imported snapshot"
    );
    Ok(())
}

/// Write a snapshot as pretty-printed JSON
///
/// # Errors
///
/// Returns a serialization or storage error
pub async fn write_snapshot(snapshot: &Snapshot, path: &Path) -> AppResult<()> {
    let text = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, text).await?;
    Ok(())
}

/// Read a snapshot file
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or a serialization error if
/// it is not a snapshot
pub async fn read_snapshot(path: &Path) -> AppResult<Snapshot> {
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Render the weigh-in log as CSV, with BMI when the profile height is known
///
/// # Errors
///
/// Returns a storage error
pub async fn export_weigh_ins_csv(store: &SharedStore) -> AppResult<String> {
    let height_m = ProfileRepository::new(store.clone())
        .load()
        .await?
        .and_then(|profile| profile.height_m());
    let entries = WeighInLog::new(store.clone()).list().await?;

    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for point in weight_history_series(&entries, height_m) {
        let bmi = point.bmi.map(|bmi| format!("{bmi:.1}")).unwrap_or_default();
        // writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{},{},{bmi}",
            csv_field(&point.label),
            point.weight_kg
        );
    }
    Ok(csv)
}

/// Delete every stored record
///
/// # Errors
///
/// Returns a storage error
pub async fn reset(store: &SharedStore) -> AppResult<()> {
    store.clear().await?;
    info!(backend = store.backend_name(), "Reset all stored data");
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use crate::storage::KeyValueStore;
    use async_trait::async_trait;
    use std::sync::Arc;
    use vitality_core::errors::ErrorCode;

    /// Memory store whose writes to one key fail
    struct BrokenKeyStore {
        inner: MemoryStore,
        broken: &'static str,
    }

    #[async_trait]
    impl KeyValueStore for BrokenKeyStore {
        async fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> AppResult<()> {
            if key == self.broken {
                return Err(AppError::storage(format!("disk full writing {key}")));
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> AppResult<()> {
            self.inner.remove(key).await
        }

        async fn clear(&self) -> AppResult<()> {
            self.inner.clear().await
        }

        fn backend_name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_failed_import_keeps_unwritten_records() {
        let store: SharedStore = Arc::new(BrokenKeyStore {
            inner: MemoryStore::new(),
            broken: storage_keys::NUTRITIONISTS,
        });
        store
            .set(storage_keys::PROFILE, r#"{"name":"Ana"}"#.to_owned())
            .await
            .unwrap();

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            exported_at: Utc::now(),
            profile: None,
            weigh_ins: vec![WeighIn::new("01/01/25 08:00", 70.0).unwrap()],
            nutritionists: Vec::new(),
        };
        let err = import_snapshot(&store, &snapshot).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);

        assert_eq!(
            store.get(storage_keys::PROFILE).await.unwrap().as_deref(),
            Some(r#"{"name":"Ana"}"#)
        );
        assert_eq!(
            WeighInLog::new(store.clone()).list().await.unwrap(),
            snapshot.weigh_ins
        );
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("01/02/25 08:00"), "01/02/25 08:00");
        assert_eq!(csv_field("01/02/25, 08:00"), "\"01/02/25, 08:00\"");
        assert_eq!(csv_field("a\"b"), "\"a\"\"b\"");
    }
}
