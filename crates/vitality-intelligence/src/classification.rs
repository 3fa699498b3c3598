// ABOUTME: Gender-specific BMI classification tables with advice and risk factors
// ABOUTME: Ordered band lists evaluated with strict less-than, ending in an unbounded catch-all
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Weight Classification
//!
//! Two ordered threshold tables, one for female profiles and one shared by male and
//! unspecified profiles. The first band whose upper bound exceeds the BMI wins, so a
//! BMI sitting exactly on a bound belongs to the next band. The final band is
//! unbounded and also absorbs a NaN BMI.

use serde::Serialize;
use std::fmt;
use tracing::debug;
use vitality_core::constants::classification::{FEMALE_UPPER_BOUNDS, MALE_UPPER_BOUNDS};
use vitality_core::models::Gender;

/// Weight category, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightCategory {
    /// Below the ideal band
    Underweight,
    /// Ideal band
    Ideal,
    /// Slightly above the ideal band
    SlightlyAbove,
    /// Overweight
    Overweight,
    /// Obesity
    Obesity,
}

impl WeightCategory {
    /// pt-BR label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Abaixo do peso",
            Self::Ideal => "Peso ideal",
            Self::SlightlyAbove => "Pouco acima do peso",
            Self::Overweight => "Sobrepeso",
            Self::Obesity => "Obesidade",
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a classification table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBand {
    /// Exclusive upper BMI bound
    pub upper_bound: f64,
    /// Category assigned to this band
    pub category: WeightCategory,
    /// Advisory sentence
    pub advice: &'static str,
    /// Named risk factors
    pub risk_factors: &'static [&'static str],
    /// Category with its BMI range, as shown on the dashboard
    pub range_label: &'static str,
}

const MINIMAL_RISK: &str = "Risco mínimo para doenças relacionadas ao peso";

/// Female classification table
pub const FEMALE_BANDS: [WeightBand; 5] = [
    WeightBand {
        upper_bound: FEMALE_UPPER_BOUNDS[0],
        category: WeightCategory::Underweight,
        advice: "Procure acompanhamento nutricional para ganho de peso saudável.",
        risk_factors: &["Osteoporose", "Anemia", "Queda de cabelo"],
        range_label: "Abaixo do peso (IMC < 19,1)",
    },
    WeightBand {
        upper_bound: FEMALE_UPPER_BOUNDS[1],
        category: WeightCategory::Ideal,
        advice: "Mantenha hábitos saudáveis com alimentação balanceada e exercícios.",
        risk_factors: &[MINIMAL_RISK],
        range_label: "Peso ideal (IMC 19,1 - 25,7)",
    },
    WeightBand {
        upper_bound: FEMALE_UPPER_BOUNDS[2],
        category: WeightCategory::SlightlyAbove,
        advice: "Reduza calorias e pratique exercícios aeróbicos.",
        risk_factors: &["Risco moderado de diabetes", "Pressão alta"],
        range_label: "Pouco acima do peso (IMC 25,8 - 27,2)",
    },
    WeightBand {
        upper_bound: FEMALE_UPPER_BOUNDS[3],
        category: WeightCategory::Overweight,
        advice: "Procure nutricionista para plano alimentar.",
        risk_factors: &["Diabetes tipo 2", "Hipertensão"],
        range_label: "Sobrepeso (IMC 27,3 - 32,2)",
    },
    WeightBand {
        upper_bound: f64::INFINITY,
        category: WeightCategory::Obesity,
        advice: "Acompanhamento médico é essencial.",
        risk_factors: &["Diabetes", "Hipertensão grave"],
        range_label: "Obesidade (IMC ≥ 32,3)",
    },
];

/// Male classification table, also used for `Gender::Other`
pub const MALE_BANDS: [WeightBand; 5] = [
    WeightBand {
        upper_bound: MALE_UPPER_BOUNDS[0],
        category: WeightCategory::Underweight,
        advice: "Dieta hipercalórica saudável e musculação.",
        risk_factors: &["Baixa imunidade", "Fadiga crônica"],
        range_label: "Abaixo do peso (IMC < 20,7)",
    },
    WeightBand {
        upper_bound: MALE_UPPER_BOUNDS[1],
        category: WeightCategory::Ideal,
        advice: "Continue com estilo de vida saudável.",
        risk_factors: &[MINIMAL_RISK],
        range_label: "Peso ideal (IMC 20,7 - 26,3)",
    },
    WeightBand {
        upper_bound: MALE_UPPER_BOUNDS[2],
        category: WeightCategory::SlightlyAbove,
        advice: "Reduza processados e aumente atividade física.",
        risk_factors: &["Colesterol elevado", "Pré-diabetes"],
        range_label: "Pouco acima do peso (IMC 26,4 - 27,7)",
    },
    WeightBand {
        upper_bound: MALE_UPPER_BOUNDS[3],
        category: WeightCategory::Overweight,
        advice: "Inicie programa de perda de peso.",
        risk_factors: &["Doenças coronarianas"],
        range_label: "Sobrepeso (IMC 27,8 - 31,0)",
    },
    WeightBand {
        upper_bound: f64::INFINITY,
        category: WeightCategory::Obesity,
        advice: "Avaliação médica completa recomendada.",
        risk_factors: &["Infarto", "AVC"],
        range_label: "Obesidade (IMC ≥ 31,1)",
    },
];

/// Result of classifying a BMI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightClassification {
    /// Category
    pub category: WeightCategory,
    /// Advisory sentence
    pub advice: &'static str,
    /// Named risk factors
    pub risk_factors: &'static [&'static str],
    /// Category with its BMI range
    pub range_label: &'static str,
}

impl From<&WeightBand> for WeightClassification {
    fn from(band: &WeightBand) -> Self {
        Self {
            category: band.category,
            advice: band.advice,
            risk_factors: band.risk_factors,
            range_label: band.range_label,
        }
    }
}

/// Classification table for a gender
#[must_use]
pub const fn bands_for(gender: Gender) -> &'static [WeightBand; 5] {
    match gender {
        Gender::Female => &FEMALE_BANDS,
        Gender::Male | Gender::Other => &MALE_BANDS,
    }
}

/// Map a BMI to its weight category, advice, and risk factors
#[must_use]
pub fn classify_weight(bmi: f64, gender: Gender) -> WeightClassification {
    let bands = bands_for(gender);
    let [.., catch_all] = bands;
    let band = bands
        .iter()
        .find(|band| bmi < band.upper_bound)
        .unwrap_or(catch_all);
    debug!(bmi, ?gender, category = ?band.category, "Classified weight");
    WeightClassification::from(band)
}
