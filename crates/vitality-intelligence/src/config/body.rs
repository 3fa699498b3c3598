// ABOUTME: Body metric configuration for ideal weight and weight-delta reporting
// ABOUTME: Gender-specific ideal-weight factors and the BMI cutoffs for lose/gain advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::{Deserialize, Serialize};
use vitality_core::constants::{bmi, ideal_weight};
use vitality_core::models::Gender;

use super::error::ConfigError;

/// Ideal weight is `height² × factor`, with one factor per gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightConfig {
    /// Factor applied to female profiles
    pub female_factor: f64,
    /// Factor applied to male profiles and to `Gender::Other`
    pub male_factor: f64,
}

impl Default for IdealWeightConfig {
    fn default() -> Self {
        Self {
            female_factor: ideal_weight::FEMALE_FACTOR,
            male_factor: ideal_weight::MALE_FACTOR,
        }
    }
}

impl IdealWeightConfig {
    /// Factor for the given gender
    #[must_use]
    pub const fn factor_for(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Female => self.female_factor,
            Gender::Male | Gender::Other => self.male_factor,
        }
    }

    /// Ideal weight in kilograms for a height in meters
    #[must_use]
    pub fn ideal_weight_kg(&self, height_m: f64, gender: Gender) -> f64 {
        height_m * height_m * self.factor_for(gender)
    }

    /// Validate factors
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a factor is not a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        for factor in [self.female_factor, self.male_factor] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Ideal weight factors must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// BMI cutoffs deciding whether a weight delta is reported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDeltaConfig {
    /// Report weight to lose strictly above this BMI
    pub lose_above_bmi: f64,
    /// Report weight to gain strictly below this BMI
    pub gain_below_bmi: f64,
}

impl Default for WeightDeltaConfig {
    fn default() -> Self {
        Self {
            lose_above_bmi: bmi::OVERWEIGHT_ABOVE,
            gain_below_bmi: bmi::UNDERWEIGHT_BELOW,
        }
    }
}

impl WeightDeltaConfig {
    /// Validate cutoffs
    ///
    /// # Errors
    ///
    /// Returns an error if a cutoff is not a positive finite number or the gain cutoff is not below the lose cutoff
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |cutoff: f64| cutoff.is_finite() && cutoff > 0.0;
        if !positive(self.gain_below_bmi) || !positive(self.lose_above_bmi) {
            return Err(ConfigError::ValueOutOfRange(
                "Weight delta BMI cutoffs must be positive",
            ));
        }
        if self.gain_below_bmi >= self.lose_above_bmi {
            return Err(ConfigError::InvalidRange(
                "Gain cutoff must be below the lose cutoff",
            ));
        }
        Ok(())
    }
}
