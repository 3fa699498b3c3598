// ABOUTME: Recommendation engine configuration with environment overrides and validation
// ABOUTME: Orchestrates body-metric and diet-tier configs behind a validated global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! Intelligence Configuration Module
//!
//! Every tunable number of the engine lives here with a default equal to the
//! built-in tables. Overrides come from `VITALITY_*` environment variables and are
//! validated before use.
//!
//! - `body` - ideal-weight factors and weight-delta cutoffs
//! - `diet` - diet-tier BMI cutoffs and weight ratios

pub mod body;
pub mod diet;
pub mod error;

pub use body::{IdealWeightConfig, WeightDeltaConfig};
pub use diet::DietTierThresholds;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Ideal-weight factors
    pub ideal_weight: IdealWeightConfig,
    /// Cutoffs for reporting weight to lose or gain
    pub weight_delta: WeightDeltaConfig,
    /// Diet-tier selection thresholds
    pub diet_tiers: DietTierThresholds,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint of any sub-config
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ideal_weight.validate()?;
        self.weight_delta.validate()?;
        self.diet_tiers.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .replace(',', ".")
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Ideal weight
        Self::apply_env_var(
            "VITALITY_IDEAL_WEIGHT_FEMALE",
            &mut self.ideal_weight.female_factor,
        )?;
        Self::apply_env_var(
            "VITALITY_IDEAL_WEIGHT_MALE",
            &mut self.ideal_weight.male_factor,
        )?;

        // Weight delta
        Self::apply_env_var(
            "VITALITY_DELTA_LOSE_ABOVE_BMI",
            &mut self.weight_delta.lose_above_bmi,
        )?;
        Self::apply_env_var(
            "VITALITY_DELTA_GAIN_BELOW_BMI",
            &mut self.weight_delta.gain_below_bmi,
        )?;

        // Diet tiers
        Self::apply_env_var(
            "VITALITY_DIET_GAIN_BMI",
            &mut self.diet_tiers.gain_below_bmi,
        )?;
        Self::apply_env_var(
            "VITALITY_DIET_MAINTENANCE_BMI",
            &mut self.diet_tiers.maintenance_below_bmi,
        )?;
        Self::apply_env_var(
            "VITALITY_DIET_LIGHT_DEFICIT_BMI",
            &mut self.diet_tiers.light_deficit_below_bmi,
        )?;
        Self::apply_env_var(
            "VITALITY_DIET_LOWER_RATIO",
            &mut self.diet_tiers.lower_ratio,
        )?;
        Self::apply_env_var(
            "VITALITY_DIET_UPPER_RATIO",
            &mut self.diet_tiers.upper_ratio,
        )?;
        Self::apply_env_var(
            "VITALITY_DIET_LIGHT_DEFICIT_RATIO",
            &mut self.diet_tiers.light_deficit_ratio,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        let config = IntelligenceConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.ideal_weight.female_factor - 21.5).abs() < f64::EPSILON);
        assert!((config.ideal_weight.male_factor - 23.5).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_env_override_accepts_comma_decimal() {
        env::set_var("VITALITY_IDEAL_WEIGHT_FEMALE", "22,4");
        let config = IntelligenceConfig::load();
        env::remove_var("VITALITY_IDEAL_WEIGHT_FEMALE");

        let config = config.unwrap();
        assert!((config.ideal_weight.female_factor - 22.4).abs() < 1e-9);
    }

    #[test]
    #[serial]
    fn test_env_override_rejects_garbage() {
        env::set_var("VITALITY_DIET_UPPER_RATIO", "high");
        let result = IntelligenceConfig::load();
        env::remove_var("VITALITY_DIET_UPPER_RATIO");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_is_validated() {
        env::set_var("VITALITY_DIET_GAIN_BMI", "26");
        let result = IntelligenceConfig::load();
        env::remove_var("VITALITY_DIET_GAIN_BMI");

        assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_rejects_nan_cutoff() {
        env::set_var("VITALITY_DELTA_LOSE_ABOVE_BMI", "NaN");
        let result = IntelligenceConfig::load();
        env::remove_var("VITALITY_DELTA_LOSE_ABOVE_BMI");

        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }

    #[test]
    fn test_non_finite_cutoffs_rejected() {
        let mut config = IntelligenceConfig::default();
        config.weight_delta.gain_below_bmi = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = IntelligenceConfig::default();
        config.diet_tiers.light_deficit_below_bmi = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_ratio_ordering() {
        let mut config = IntelligenceConfig::default();
        config.diet_tiers.upper_ratio = 1.2;
        assert!(config.validate().is_err());

        let mut config = IntelligenceConfig::default();
        config.ideal_weight.male_factor = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
