// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample profiles, and store helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `vitality`

use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use vitality::models::{ActivityProfile, Comorbidity, Gender, Profile};
use vitality::storage::file::FileStore;
use vitality::storage::memory::MemoryStore;
use vitality::storage::SharedStore;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store
pub fn memory_store() -> SharedStore {
    init_test_logging();
    Arc::new(MemoryStore::new())
}

/// File store rooted in a temporary directory; keep the `TempDir` alive
pub async fn file_store() -> (tempfile::TempDir, SharedStore) {
    init_test_logging();
    let dir = tempfile::TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("vitality")).await.unwrap();
    (dir, Arc::new(store))
}

/// Valid profile with the given body measurements
pub fn profile_with(height: &str, weight: &str, gender: Gender) -> Profile {
    Profile {
        name: "Ana Souza".to_owned(),
        age: 34,
        gender,
        height: height.to_owned(),
        weight: weight.to_owned(),
        activity_profile: ActivityProfile::Fitness,
        ..Profile::default()
    }
}

/// Valid female profile, 1.65 m and 62 kg
pub fn sample_profile() -> Profile {
    profile_with("1,65", "62", Gender::Female)
}

/// Sample profile with conditions and an optional free-text note
pub fn profile_with_conditions(conditions: &[Comorbidity], other: &str) -> Profile {
    Profile {
        has_comorbidities: true,
        comorbidities: conditions.to_vec(),
        other_comorbidity: other.to_owned(),
        ..sample_profile()
    }
}
