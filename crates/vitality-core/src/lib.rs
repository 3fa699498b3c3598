// ABOUTME: Core types and constants for the Vitality health tracker
// ABOUTME: Foundation crate with error handling, domain models, and classification constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

#![deny(unsafe_code)]

//! # Vitality Core
//!
//! Foundation crate providing shared types and constants for the Vitality health
//! tracker. The recommendation engine and the application layer both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Classification thresholds, profile limits, and plan caps
//! - **models**: Profile, comorbidity, weigh-in, and nutritionist records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, Comorbidity, `WeighIn`, Nutritionist)
pub mod models;
