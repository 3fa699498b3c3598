// ABOUTME: Diet-tier selection from BMI and weight-to-ideal ratio via an ordered rule list
// ABOUTME: Static diet models (title, description, tips) for each tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Diet Tiers
//!
//! The tier comes from the first matching rule in [`DIET_TIER_RULES`]. The rules are
//! not mutually exclusive, so their order is part of the contract: BMI below the gain
//! cutoff wins even when the weight equals the ideal weight.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::DietTierThresholds;

/// Diet intensity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietTier {
    /// Healthy weight gain
    Gain,
    /// Keep current weight
    Maintenance,
    /// Mild caloric deficit
    LightDeficit,
    /// Supervised weight loss
    Loss,
}

/// Static description of a diet tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DietModel {
    /// Plan title
    pub title: &'static str,
    /// What the plan asks for
    pub description: &'static str,
    /// Practical tips
    pub tips: &'static [&'static str],
}

const GAIN_MODEL: DietModel = DietModel {
    title: "Dieta para Ganho de Peso",
    description: "Foque em refeições hipercalóricas, ricas em proteínas, carboidratos complexos e gorduras saudáveis. Inclua ovos, frango, arroz, batata-doce, azeite, abacate, castanhas e shakes nutritivos. Faça 5-6 refeições ao dia.",
    tips: &[
        "Consuma proteína em todas as refeições",
        "Adicione gorduras saudáveis como azeite e castanhas",
        "Beba líquidos entre as refeições para não reduzir o apetite",
    ],
};

const MAINTENANCE_MODEL: DietModel = DietModel {
    title: "Dieta de Manutenção",
    description: "Mantenha uma alimentação equilibrada, com variedade de legumes, verduras, frutas, proteínas magras e carboidratos integrais. Evite ultraprocessados e mantenha hidratação adequada.",
    tips: &[
        "Varie os alimentos para garantir todos os nutrientes",
        "Mantenha horários regulares para as refeições",
        "Combine proteínas com carboidratos em cada refeição",
    ],
};

const LIGHT_DEFICIT_MODEL: DietModel = DietModel {
    title: "Dieta Leve para Emagrecimento",
    description: "Reduza levemente as calorias, priorize vegetais, proteínas magras (frango, peixe, ovos), carboidratos integrais e gorduras boas. Evite frituras, doces e refrigerantes. Faça pequenas refeições ao longo do dia.",
    tips: &[
        "Aumente o consumo de fibras para saciedade",
        "Prefira alimentos integrais aos refinados",
        "Mantenha-se hidratado para controlar a fome",
    ],
};

const LOSS_MODEL: DietModel = DietModel {
    title: "Dieta para Perda de Peso",
    description: "Adote déficit calórico moderado, aumente o consumo de fibras, vegetais e proteínas. Evite açúcares, farinhas refinadas e alimentos industrializados. Considere acompanhamento nutricional.",
    tips: &[
        "Priorize proteínas magras para preservar massa muscular",
        "Reduza gradualmente o tamanho das porções",
        "Planeje as refeições com antecedência para evitar deslizes",
    ],
};

impl DietTier {
    /// Every tier, lightest to heaviest intervention
    pub const ALL: [Self; 4] = [Self::Gain, Self::Maintenance, Self::LightDeficit, Self::Loss];

    /// Tag used by recipes and serialized output
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Maintenance => "maintenance",
            Self::LightDeficit => "lightDeficit",
            Self::Loss => "loss",
        }
    }

    /// Parse a tier tag
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.key() == key)
    }

    /// Static description of the tier
    #[must_use]
    pub const fn model(self) -> &'static DietModel {
        match self {
            Self::Gain => &GAIN_MODEL,
            Self::Maintenance => &MAINTENANCE_MODEL,
            Self::LightDeficit => &LIGHT_DEFICIT_MODEL,
            Self::Loss => &LOSS_MODEL,
        }
    }
}

impl fmt::Display for DietTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values a diet rule inspects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DietInputs {
    /// Body-mass index
    pub bmi: f64,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Ideal weight in kilograms
    pub ideal_weight_kg: f64,
}

/// Predicate paired with the tier it selects
#[derive(Debug, Clone, Copy)]
pub struct DietTierRule {
    /// Tier chosen when the predicate holds
    pub tier: DietTier,
    /// Rule predicate
    pub applies: fn(&DietInputs, &DietTierThresholds) -> bool,
}

fn needs_gain(inputs: &DietInputs, t: &DietTierThresholds) -> bool {
    inputs.bmi < t.gain_below_bmi || inputs.weight_kg < inputs.ideal_weight_kg * t.lower_ratio
}

fn within_maintenance_band(inputs: &DietInputs, t: &DietTierThresholds) -> bool {
    inputs.bmi < t.maintenance_below_bmi
        && inputs.ideal_weight_kg * t.lower_ratio <= inputs.weight_kg
        && inputs.weight_kg <= inputs.ideal_weight_kg * t.upper_ratio
}

fn needs_light_deficit(inputs: &DietInputs, t: &DietTierThresholds) -> bool {
    inputs.bmi < t.light_deficit_below_bmi
        || inputs.weight_kg < inputs.ideal_weight_kg * t.light_deficit_ratio
}

const fn always(_: &DietInputs, _: &DietTierThresholds) -> bool {
    true
}

/// Ordered diet rules; the first predicate that holds picks the tier
pub const DIET_TIER_RULES: [DietTierRule; 4] = [
    DietTierRule {
        tier: DietTier::Gain,
        applies: needs_gain,
    },
    DietTierRule {
        tier: DietTier::Maintenance,
        applies: within_maintenance_band,
    },
    DietTierRule {
        tier: DietTier::LightDeficit,
        applies: needs_light_deficit,
    },
    DietTierRule {
        tier: DietTier::Loss,
        applies: always,
    },
];

/// Select the diet tier for a BMI, weight, and ideal weight
#[must_use]
pub fn select_diet_tier(
    bmi: f64,
    weight_kg: f64,
    ideal_weight_kg: f64,
    thresholds: &DietTierThresholds,
) -> DietTier {
    let inputs = DietInputs {
        bmi,
        weight_kg,
        ideal_weight_kg,
    };
    let tier = DIET_TIER_RULES
        .iter()
        .find(|rule| (rule.applies)(&inputs, thresholds))
        .map_or(DietTier::Loss, |rule| rule.tier);
    debug!(bmi, weight_kg, ideal_weight_kg, %tier, "Selected diet tier");
    tier
}
