// ABOUTME: Core data models for the Vitality health tracker
// ABOUTME: Profile, Comorbidity, WeighIn, and Nutritionist records with their serde mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Data Models
//!
//! Records persisted by the application layer and consumed by the recommendation
//! engine. Field names are English snake case; serde aliases accept the legacy
//! Portuguese keys written by earlier releases of the mobile app.

mod comorbidity;
mod nutritionist;
mod profile;
mod serde_helpers;
mod weigh_in;

pub use comorbidity::Comorbidity;
pub use nutritionist::{Attachment, Nutritionist};
pub use profile::{parse_locale_decimal, ActivityProfile, Gender, Profile};
pub use weigh_in::{validate_weight, WeighIn};
