// ABOUTME: Integration tests for metric derivation, weight classification, and tier selection
// ABOUTME: Covers decimal parsing, table boundaries, and rule ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::profile_with;
use vitality::intelligence::config::{DietTierThresholds, IdealWeightConfig, WeightDeltaConfig};
use vitality::intelligence::metrics::{derive_body_metrics, ProfileField};
use vitality::intelligence::{
    classify_weight, derive_metrics, select_diet_tier, select_exercise_tier, DietTier,
    ExerciseTier, IntelligenceConfig, WeightCategory, WeightDelta,
};
use vitality::models::Gender;

#[test]
fn test_bmi_is_weight_over_height_squared() {
    let ideal = IdealWeightConfig::default();
    let delta = WeightDeltaConfig::default();
    for height_cm in (50..=250).step_by(25) {
        for weight in (20..=300).step_by(40) {
            let height_m = f64::from(height_cm) / 100.0;
            let weight_kg = f64::from(weight);
            let body = derive_body_metrics(height_m, weight_kg, Gender::Male, &ideal, &delta);
            assert!((body.bmi - weight_kg / (height_m * height_m)).abs() < 1e-9);
            assert!((body.ideal_weight_kg - height_m * height_m * 23.5).abs() < 1e-9);
        }
    }
}

#[test]
fn test_comma_decimal_matches_dot_decimal() {
    let config = IntelligenceConfig::default();
    let comma = derive_metrics(&profile_with("1,70", "68,2", Gender::Male), &config).unwrap();
    let dot = derive_metrics(&profile_with("1.70", "68.2", Gender::Male), &config).unwrap();
    assert_eq!(comma, dot);
    assert!((comma.height_m - 1.7).abs() < f64::EPSILON);
}

#[test]
fn test_missing_measurements_are_reported_not_zeroed() {
    let config = IntelligenceConfig::default();
    let missing = derive_metrics(&profile_with("", "70", Gender::Female), &config).unwrap_err();
    assert_eq!(missing.missing, vec![ProfileField::Height]);

    let missing = derive_metrics(&profile_with("1,60", "-3", Gender::Female), &config).unwrap_err();
    assert_eq!(missing.missing, vec![ProfileField::Weight]);
}

#[test]
fn test_weight_delta_uses_bmi_cutoffs() {
    let config = IntelligenceConfig::default();
    let heavy = derive_metrics(&profile_with("1,60", "80", Gender::Female), &config).unwrap();
    assert!(matches!(heavy.weight_delta, WeightDelta::ToLose(kg) if (kg - (80.0 - 2.56 * 21.5)).abs() < 1e-9));

    let light = derive_metrics(&profile_with("1,80", "55", Gender::Male), &config).unwrap();
    assert!(matches!(light.weight_delta, WeightDelta::ToGain(kg) if kg > 0.0));
}

#[test]
fn test_female_boundary_is_strict_less_than() {
    assert_eq!(classify_weight(19.1, Gender::Female).category, WeightCategory::Ideal);
    assert_eq!(classify_weight(19.09, Gender::Female).category, WeightCategory::Underweight);
    assert_eq!(classify_weight(25.8, Gender::Female).category, WeightCategory::SlightlyAbove);
}

#[test]
fn test_male_and_other_share_table() {
    assert_eq!(classify_weight(20.7, Gender::Male).category, WeightCategory::Ideal);
    assert_eq!(classify_weight(31.1, Gender::Male).category, WeightCategory::Obesity);
    assert_eq!(
        classify_weight(27.0, Gender::Other),
        classify_weight(27.0, Gender::Male)
    );
}

#[test]
fn test_classification_is_monotonic_in_bmi() {
    for gender in [Gender::Female, Gender::Male] {
        let mut previous = WeightCategory::Underweight;
        for step in 100..=500 {
            let bmi = f64::from(step) / 10.0;
            let category = classify_weight(bmi, gender).category;
            assert!(category >= previous, "{gender:?} regressed at BMI {bmi}");
            previous = category;
        }
    }
}

#[test]
fn test_diet_tier_rules() {
    let thresholds = DietTierThresholds::default();
    assert_eq!(select_diet_tier(17.0, 50.0, 50.0, &thresholds), DietTier::Gain);
    assert_eq!(select_diet_tier(24.0, 70.0, 70.0, &thresholds), DietTier::Maintenance);
    assert_eq!(select_diet_tier(27.0, 80.0, 75.0, &thresholds), DietTier::LightDeficit);
    assert_eq!(select_diet_tier(32.0, 100.0, 70.0, &thresholds), DietTier::Loss);
}

#[test]
fn test_exercise_tier_keywords() {
    assert_eq!(
        select_exercise_tier("atleta_alto_rendimento"),
        ExerciseTier::HighPerformanceAthlete
    );
    assert_eq!(select_exercise_tier("Atleta amador"), ExerciseTier::AmateurAthlete);
    assert_eq!(select_exercise_tier("ativo"), ExerciseTier::Active);
    assert_eq!(select_exercise_tier("FITNESS"), ExerciseTier::Fitness);
    assert_eq!(select_exercise_tier("xyz"), ExerciseTier::Sedentary);
}

#[test]
fn test_derived_tiers_follow_profile() {
    let config = IntelligenceConfig::default();
    let metrics = derive_metrics(&profile_with("1,65", "58,5", Gender::Female), &config).unwrap();
    assert_eq!(metrics.exercise_tier, ExerciseTier::Fitness);
    assert_eq!(metrics.diet_tier, DietTier::Maintenance);

    let above_band = derive_metrics(&profile_with("1,65", "62", Gender::Female), &config).unwrap();
    assert_eq!(above_band.diet_tier, DietTier::LightDeficit);
}
