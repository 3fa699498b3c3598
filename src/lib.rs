// ABOUTME: Main library entry point for the Vitality health tracker
// ABOUTME: Wires the metrics engine to persistent storage, backups, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

#![deny(unsafe_code)]

//! # Vitality
//!
//! A personal health tracker: keep a profile and a weigh-in log, and get BMI, ideal
//! weight, weight classification, weekly diet and exercise plans adjusted for chronic
//! conditions, and recipe suggestions.
//!
//! ## Architecture
//!
//! - **vitality-core**: Errors, constants, and the persisted record types
//! - **vitality-intelligence**: The pure metrics and recommendation engine
//! - **storage**: Async key-value stores (in-memory and one JSON file per key)
//! - **repositories**: Typed access to the profile, weigh-in log, and nutritionists
//! - **backup**: Snapshot export/import, CSV export, and reset
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitality::errors::AppResult;
//! use vitality::intelligence::{derive_metrics, IntelligenceConfig};
//! use vitality::repositories::ProfileRepository;
//! use vitality::storage::memory::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let profiles = ProfileRepository::new(Arc::new(MemoryStore::new()));
//!     if let Some(profile) = profiles.load().await? {
//!         match derive_metrics(&profile, IntelligenceConfig::global()) {
//!             Ok(metrics) => println!("BMI {:.2}", metrics.bmi),
//!             Err(missing) => println!("{missing}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

/// Backup, restore, CSV export, and reset
pub mod backup;

/// Application configuration from the environment
pub mod config;

/// Structured logging setup
pub mod logging;

/// Typed repositories over the key-value store
pub mod repositories;

/// Async key-value storage backends
pub mod storage;

pub use vitality_core::{constants, errors, models};
pub use vitality_intelligence as intelligence;
