// ABOUTME: Metric derivation from profile inputs: BMI, ideal weight, weight delta, tiers
// ABOUTME: Signals insufficient data instead of defaulting when height or weight is unusable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Metric Derivation
//!
//! `derive_metrics` is the entry point of the engine. It parses the profile's height
//! and weight, and either returns every derived value or [`InsufficientData`] naming
//! the unusable fields. Nothing is cached; callers recompute from the latest profile.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;
use vitality_core::models::{Gender, Profile, WeighIn};

use crate::classification::{classify_weight, WeightClassification};
use crate::config::{IdealWeightConfig, IntelligenceConfig, WeightDeltaConfig};
use crate::diet::{select_diet_tier, DietTier};
use crate::exercise::{select_exercise_tier, ExerciseTier};

pub use vitality_core::models::parse_locale_decimal;

/// Profile field needed for derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Height in meters
    Height,
    /// Weight in kilograms
    Weight,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Height => "height",
            Self::Weight => "weight",
        })
    }
}

/// Height or weight is absent or not a positive number
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("insufficient profile data: {}", join_fields(.missing))]
pub struct InsufficientData {
    /// Fields that could not be used
    pub missing: Vec<ProfileField>,
}

fn join_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Distance to the ideal weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "kg", rename_all = "snake_case")]
pub enum WeightDelta {
    /// BMI above the lose cutoff; kilograms above ideal weight
    ToLose(f64),
    /// BMI below the gain cutoff; kilograms below ideal weight
    ToGain(f64),
    /// Neither is reported
    OnTarget,
}

/// BMI, ideal weight, and weight delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyMetrics {
    /// Body-mass index
    pub bmi: f64,
    /// Ideal weight in kilograms
    pub ideal_weight_kg: f64,
    /// Distance to the ideal weight
    pub weight_delta: WeightDelta,
}

/// Everything derived from a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Height used for the derivation
    pub height_m: f64,
    /// Weight used for the derivation
    pub weight_kg: f64,
    /// Body-mass index
    pub bmi: f64,
    /// Ideal weight in kilograms
    pub ideal_weight_kg: f64,
    /// Distance to the ideal weight
    pub weight_delta: WeightDelta,
    /// Weight category, advice, and risk factors
    pub classification: WeightClassification,
    /// Selected diet tier
    pub diet_tier: DietTier,
    /// Selected exercise tier
    pub exercise_tier: ExerciseTier,
}

/// Compute BMI, ideal weight, and weight delta
#[must_use]
pub fn derive_body_metrics(
    height_m: f64,
    weight_kg: f64,
    gender: Gender,
    ideal_weight: &IdealWeightConfig,
    delta: &WeightDeltaConfig,
) -> BodyMetrics {
    let bmi = weight_kg / (height_m * height_m);
    let ideal_weight_kg = ideal_weight.ideal_weight_kg(height_m, gender);
    let weight_delta = if bmi > delta.lose_above_bmi {
        WeightDelta::ToLose(weight_kg - ideal_weight_kg)
    } else if bmi < delta.gain_below_bmi {
        WeightDelta::ToGain(ideal_weight_kg - weight_kg)
    } else {
        WeightDelta::OnTarget
    };
    BodyMetrics {
        bmi,
        ideal_weight_kg,
        weight_delta,
    }
}

/// Derive every metric of a profile
///
/// # Errors
///
/// Returns [`InsufficientData`] listing height and/or weight when they do not parse
/// to positive finite numbers.
pub fn derive_metrics(
    profile: &Profile,
    config: &IntelligenceConfig,
) -> Result<DerivedMetrics, InsufficientData> {
    let height = profile.height_m();
    let weight = profile.weight_kg();
    let (Some(height_m), Some(weight_kg)) = (height, weight) else {
        let missing = [
            (height.is_none(), ProfileField::Height),
            (weight.is_none(), ProfileField::Weight),
        ]
        .into_iter()
        .filter_map(|(absent, field)| absent.then_some(field))
        .collect();
        return Err(InsufficientData { missing });
    };

    let body = derive_body_metrics(
        height_m,
        weight_kg,
        profile.gender,
        &config.ideal_weight,
        &config.weight_delta,
    );
    let classification = classify_weight(body.bmi, profile.gender);
    let diet_tier = select_diet_tier(
        body.bmi,
        weight_kg,
        body.ideal_weight_kg,
        &config.diet_tiers,
    );
    let exercise_tier = select_exercise_tier(profile.activity_profile.tag());

    debug!(
        bmi = body.bmi,
        ideal_weight_kg = body.ideal_weight_kg,
        %diet_tier,
        ?exercise_tier,
        "Derived profile metrics"
    );

    Ok(DerivedMetrics {
        height_m,
        weight_kg,
        bmi: body.bmi,
        ideal_weight_kg: body.ideal_weight_kg,
        weight_delta: body.weight_delta,
        classification,
        diet_tier,
        exercise_tier,
    })
}

/// One point of the weight history chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    /// Timestamp label of the weigh-in
    pub label: String,
    /// Recorded weight
    pub weight_kg: f64,
    /// BMI at that weight, when the profile height is known
    pub bmi: Option<f64>,
}

/// Build the weight and BMI series of the weigh-in log, in log order
#[must_use]
pub fn weight_history_series(entries: &[WeighIn], height_m: Option<f64>) -> Vec<HistoryPoint> {
    let height_m = height_m.filter(|h| h.is_finite() && *h > 0.0);
    entries
        .iter()
        .map(|entry| HistoryPoint {
            label: entry.recorded_at.clone(),
            weight_kg: entry.weight_kg,
            bmi: height_m.map(|h| entry.weight_kg / (h * h)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::WeightCategory;
    use vitality_core::models::ActivityProfile;

    fn profile(height: &str, weight: &str, gender: Gender) -> Profile {
        Profile {
            name: "Maria Silva".to_owned(),
            age: 30,
            gender,
            height: height.to_owned(),
            weight: weight.to_owned(),
            activity_profile: ActivityProfile::Fitness,
            ..Profile::default()
        }
    }

    #[test]
    fn test_bmi_and_ideal_weight() {
        let metrics =
            derive_metrics(&profile("1,60", "56", Gender::Female), &IntelligenceConfig::default())
                .unwrap();
        assert!((metrics.bmi - 56.0 / 2.56).abs() < 1e-9);
        assert!((metrics.ideal_weight_kg - 2.56 * 21.5).abs() < 1e-9);
        assert_eq!(metrics.weight_delta, WeightDelta::OnTarget);
        assert_eq!(metrics.classification.category, WeightCategory::Ideal);
        assert_eq!(metrics.exercise_tier, ExerciseTier::Fitness);
    }

    #[test]
    fn test_comma_and_dot_agree() {
        let config = IntelligenceConfig::default();
        let comma = derive_metrics(&profile("1,75", "70,5", Gender::Male), &config).unwrap();
        let dot = derive_metrics(&profile("1.75", "70.5", Gender::Male), &config).unwrap();
        assert_eq!(comma, dot);
    }

    #[test]
    fn test_weight_delta_directions() {
        let ideal = IdealWeightConfig::default();
        let delta = WeightDeltaConfig::default();

        let heavy = derive_body_metrics(1.70, 90.0, Gender::Male, &ideal, &delta);
        assert_eq!(
            heavy.weight_delta,
            WeightDelta::ToLose(90.0 - 1.7 * 1.7 * 23.5)
        );

        let light = derive_body_metrics(1.70, 50.0, Gender::Male, &ideal, &delta);
        assert!(matches!(light.weight_delta, WeightDelta::ToGain(kg) if kg > 0.0));
    }

    #[test]
    fn test_insufficient_data_names_fields() {
        let config = IntelligenceConfig::default();
        let err = derive_metrics(&profile("", "abc", Gender::Female), &config).unwrap_err();
        assert_eq!(err.missing, vec![ProfileField::Height, ProfileField::Weight]);
        assert_eq!(err.to_string(), "insufficient profile data: height, weight");

        let err = derive_metrics(&profile("1,70", "0", Gender::Female), &config).unwrap_err();
        assert_eq!(err.missing, vec![ProfileField::Weight]);
    }

    #[test]
    fn test_history_series() {
        let entries = vec![
            WeighIn::new("01/01/25 08:00", 80.0).unwrap(),
            WeighIn::new("08/01/25 08:00", 78.0).unwrap(),
        ];
        let series = weight_history_series(&entries, Some(2.0));
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].label, "08/01/25 08:00");
        assert!((series[0].bmi.unwrap() - 20.0).abs() < 1e-9);

        let no_height = weight_history_series(&entries, None);
        assert!(no_height.iter().all(|point| point.bmi.is_none()));
    }
}
