// ABOUTME: Environment configuration for the data directory and logging
// ABOUTME: Resolves VITALITY_DATA_DIR with a platform data-dir default and a local fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! Environment-based configuration

use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::logging::LoggingConfig;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "VITALITY_DATA_DIR";

/// Directory created under the platform data directory
const APP_DIR_NAME: &str = "vitality";

/// Used when the platform has no data directory
const FALLBACK_DATA_DIR: &str = "./data";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);
        info!(data_dir = %data_dir.display(), "Loaded application configuration");
        Self {
            data_dir,
            logging: LoggingConfig::from_env(),
        }
    }

    /// Replace the data directory, e.g. from a `--data-dir` flag
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Platform data directory joined with the app name, or `./data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory, using {FALLBACK_DATA_DIR}");
            PathBuf::from(FALLBACK_DATA_DIR)
        },
        |dir| dir.join(APP_DIR_NAME),
    )
}
