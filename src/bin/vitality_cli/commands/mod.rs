// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker
// ABOUTME: Command modules for vitality-cli and the shared command context
// ABOUTME: The context bundles the store, repositories, and static catalogs

pub mod backup;
pub mod nutritionist;
pub mod plans;
pub mod profile;
pub mod weigh_in;

use vitality::errors::{AppError, AppResult};
use vitality::intelligence::{IntelligenceConfig, PlanCatalog, RecipeCatalog};
use vitality::models::Profile;
use vitality::repositories::{NutritionistDirectory, ProfileRepository, WeighInLog};
use vitality::storage::SharedStore;

/// Everything a command needs
pub struct Context {
    pub store: SharedStore,
    pub profiles: ProfileRepository,
    pub weigh_ins: WeighInLog,
    pub nutritionists: NutritionistDirectory,
    pub intelligence: &'static IntelligenceConfig,
    pub plans: &'static PlanCatalog,
    pub recipes: &'static RecipeCatalog,
}

impl Context {
    pub fn new(store: SharedStore) -> Self {
        Self {
            profiles: ProfileRepository::new(store.clone()),
            weigh_ins: WeighInLog::new(store.clone()),
            nutritionists: NutritionistDirectory::new(store.clone()),
            store,
            intelligence: IntelligenceConfig::global(),
            plans: PlanCatalog::builtin(),
            recipes: RecipeCatalog::builtin(),
        }
    }

    /// Load the profile or fail with a hint to register one
    pub async fn require_profile(&self) -> AppResult<Profile> {
        self.profiles.load().await?.ok_or_else(|| {
            AppError::not_found("Profile").with_details(serde_json::json!({
                "hint": "run `vitality-cli profile set` first"
            }))
        })
    }
}
