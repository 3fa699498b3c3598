// ABOUTME: Recipe catalog and recommendation filtering by diet tier and comorbidities
// ABOUTME: Tags are either a diet tier key or a condition label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Recipes
//!
//! A recipe is recommended when it targets the selected diet tier, any selected
//! condition, carries no tags at all, or is tagged for maintenance. The result keeps
//! catalog order and is capped at [`MAX_RECOMMENDED_RECIPES`].

mod data;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;
use vitality_core::constants::plans::MAX_RECOMMENDED_RECIPES;
use vitality_core::models::Comorbidity;

use crate::diet::DietTier;

/// Recipe tag: a diet tier or a condition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecipeTag {
    /// Suitable for a diet tier
    Diet(DietTier),
    /// Suitable for a condition
    Condition(Comorbidity),
}

impl RecipeTag {
    /// Parse a tag string; anything that is not a diet tier key is a condition label
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        DietTier::from_key(tag.trim())
            .map_or_else(|| Self::Condition(Comorbidity::from_label(tag)), Self::Diet)
    }
}

impl From<String> for RecipeTag {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<RecipeTag> for String {
    fn from(tag: RecipeTag) -> Self {
        tag.to_string()
    }
}

impl fmt::Display for RecipeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diet(tier) => f.write_str(tier.key()),
            Self::Condition(condition) => f.write_str(condition.display_label()),
        }
    }
}

/// Heating instructions per appliance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heating {
    /// Conventional oven
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oven: Option<String>,
    /// Air fryer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airfryer: Option<String>,
    /// Microwave
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microwave: Option<String>,
}

impl Heating {
    /// Instructions with their pt-BR appliance labels, in display order
    #[must_use]
    pub fn labeled(&self) -> Vec<(&'static str, &str)> {
        [
            ("Forno", &self.oven),
            ("Airfryer", &self.airfryer),
            ("Micro-ondas", &self.microwave),
        ]
        .into_iter()
        .filter_map(|(label, text)| text.as_deref().map(|text| (label, text)))
        .collect()
    }
}

/// A recipe with its recommendation tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable slug
    pub id: String,
    /// Recipe name
    pub title: String,
    /// Short description
    pub description: String,
    /// Ingredient list
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    pub steps: Vec<String>,
    /// Heating instructions, if the recipe is served warm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating: Option<Heating>,
    /// Diet tiers and conditions the recipe suits
    #[serde(default)]
    pub tags: Vec<RecipeTag>,
}

impl Recipe {
    fn recommended_for(&self, tier: DietTier, comorbidities: &[Comorbidity]) -> bool {
        self.tags.is_empty()
            || self.tags.iter().any(|tag| match tag {
                RecipeTag::Diet(tagged) => *tagged == tier || *tagged == DietTier::Maintenance,
                RecipeTag::Condition(condition) => comorbidities.contains(condition),
            })
    }
}

static BUILTIN_RECIPES: OnceLock<RecipeCatalog> = OnceLock::new();

/// Ordered recipe list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Catalog over an explicit recipe list
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The shipped catalog, built on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_RECIPES.get_or_init(|| {
            Self::new(data::RECIPES.iter().map(data::RecipeRow::to_recipe).collect())
        })
    }

    /// Every recipe in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe by slug
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}

/// Recipes recommended for a diet tier and set of conditions
#[must_use]
pub fn filter_recipes<'a>(
    tier: DietTier,
    comorbidities: &[Comorbidity],
    catalog: &'a RecipeCatalog,
) -> Vec<&'a Recipe> {
    let recommended: Vec<&Recipe> = catalog
        .recipes
        .iter()
        .filter(|recipe| recipe.recommended_for(tier, comorbidities))
        .take(MAX_RECOMMENDED_RECIPES)
        .collect();
    debug!(%tier, count = recommended.len(), "Filtered recommended recipes");
    recommended
}
