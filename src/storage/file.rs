// ABOUTME: File-backed key-value store writing one JSON document per key
// ABOUTME: Writes go to a temporary sibling file and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use vitality_core::errors::{AppError, AppResult};

use super::{validate_key, KeyValueStore};
use crate::logging::AppLogger;

const EXTENSION: &str = "json";
const TMP_SUFFIX: &str = ".json.tmp";

/// Stores `<key>.json` files under a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub async fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}: {e}",
                dir.display()
            ))
            .with_source(e)
        })?;
        debug!(dir = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    /// Directory holding the records
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {}: {e}", path.display()))
                .with_resource_id(key)
                .with_source(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!("{key}{TMP_SUFFIX}"));
        let bytes = value.len();
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        AppLogger::log_storage_operation("set", key, self.backend_name(), bytes);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                AppLogger::log_storage_operation("remove", key, self.backend_name(), 0);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn clear(&self) -> AppResult<()> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut removed = 0_usize;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_record = path.extension().is_some_and(|ext| ext == EXTENSION);
            let is_partial_write = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(TMP_SUFFIX));
            if is_record || is_partial_write {
                fs::remove_file(&path).await?;
                removed += 1;
            }
        }
        info!(dir = %self.dir.display(), removed, "Cleared file store");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as blocking_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_on_disk() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path().join("data")).await.unwrap();

        assert_eq!(store.get("profile").await.unwrap(), None);
        store.set("profile", "{\"nome\":\"Ana\"}".to_owned()).await.unwrap();
        assert!(store.dir().join("profile.json").exists());
        assert_eq!(
            store.get("profile").await.unwrap().as_deref(),
            Some("{\"nome\":\"Ana\"}")
        );

        store.remove("profile").await.unwrap();
        store.remove("profile").await.unwrap();
        assert_eq!(store.get("profile").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_only_touches_records() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();
        store.set("weigh_ins", "[]".to_owned()).await.unwrap();
        blocking_fs::write(temp.path().join("notes.txt"), "keep").unwrap();
        blocking_fs::write(temp.path().join("profile.json.tmp"), "{\"na").unwrap();

        store.clear().await.unwrap();
        assert!(!temp.path().join("weigh_ins.json").exists());
        assert!(!temp.path().join("profile.json.tmp").exists());
        assert!(temp.path().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();
        assert!(store.get("../profile").await.is_err());
    }
}
