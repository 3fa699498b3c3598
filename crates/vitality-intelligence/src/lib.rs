// ABOUTME: Health metrics and recommendation engine for the Vitality health tracker
// ABOUTME: Pure, synchronous derivation of metrics, tiers, weekly plans, and recipe picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

#![deny(unsafe_code)]

//! # Vitality Intelligence
//!
//! Turns a user profile into health metrics and recommendations. Every function takes
//! the profile (or the values derived from it) explicitly and performs no I/O, so the
//! same inputs always produce the same outputs.
//!
//! ## Modules
//!
//! - **config**: Tunable thresholds and constants with environment overrides
//! - **metrics**: BMI, ideal weight, weight delta, and the weight history series
//! - **classification**: Gendered BMI bands with advice and risk factors
//! - **diet** / **exercise**: Ordered tier-selection rules and static tier models
//! - **plans**: Plan catalog and the weekly comorbidity merge
//! - **recipes**: Recipe catalog and recommendation filtering
//! - **dashboard**: One-call summary combining all of the above

/// Engine configuration and environment overrides
pub mod config;

/// Weight classification bands
pub mod classification;

/// Diet-tier selection and diet models
pub mod diet;

/// Exercise-tier selection and exercise plans
pub mod exercise;

/// Metric derivation from profile inputs
pub mod metrics;

/// Plan catalog and weekly plan composition
pub mod plans;

/// Recipe catalog and filtering
pub mod recipes;

/// Dashboard summary
pub mod dashboard;

pub use classification::{classify_weight, WeightCategory, WeightClassification};
pub use config::IntelligenceConfig;
pub use dashboard::{build_dashboard, Dashboard};
pub use diet::{select_diet_tier, DietTier};
pub use exercise::{select_exercise_tier, ExerciseTier};
pub use metrics::{derive_metrics, DerivedMetrics, InsufficientData, WeightDelta};
pub use plans::{
    compose_exercise_day, compose_menu_day, compose_weekly_exercise, compose_weekly_menu,
    PlanCatalog,
};
pub use recipes::{filter_recipes, Recipe, RecipeCatalog};
