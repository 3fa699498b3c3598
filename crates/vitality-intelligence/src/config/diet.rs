// ABOUTME: Diet-tier selection thresholds combining BMI bands with weight-to-ideal ratios
// ABOUTME: Defaults reproduce the 18.5/25/30 BMI bands and the 0.97/1.03/1.15 ratio bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::{Deserialize, Serialize};
use vitality_core::constants::{bmi, diet};

use super::error::ConfigError;

/// Thresholds consumed by the ordered diet-tier rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietTierThresholds {
    /// Gain applies below this BMI
    pub gain_below_bmi: f64,
    /// Maintenance requires a BMI below this value
    pub maintenance_below_bmi: f64,
    /// Light deficit applies below this BMI
    pub light_deficit_below_bmi: f64,
    /// Lower edge of the maintenance weight band, as a fraction of ideal weight
    pub lower_ratio: f64,
    /// Upper edge of the maintenance weight band
    pub upper_ratio: f64,
    /// Light deficit applies below `ideal × light_deficit_ratio`
    pub light_deficit_ratio: f64,
}

impl Default for DietTierThresholds {
    fn default() -> Self {
        Self {
            gain_below_bmi: bmi::UNDERWEIGHT_BELOW,
            maintenance_below_bmi: bmi::OVERWEIGHT_ABOVE,
            light_deficit_below_bmi: bmi::OBESITY_FROM,
            lower_ratio: diet::LOWER_RATIO,
            upper_ratio: diet::UPPER_RATIO,
            light_deficit_ratio: diet::LIGHT_DEFICIT_RATIO,
        }
    }
}

impl DietTierThresholds {
    /// Validate ordering of cutoffs and ratios
    ///
    /// # Errors
    ///
    /// Returns an error if BMI cutoffs are not positive and ascending, or if the ratios
    /// do not satisfy `lower < 1 < upper < light_deficit`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.gain_below_bmi,
            self.maintenance_below_bmi,
            self.light_deficit_below_bmi,
            self.lower_ratio,
            self.upper_ratio,
            self.light_deficit_ratio,
        ];
        if self.gain_below_bmi <= 0.0 || !values.iter().all(|value| value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Diet tier BMI cutoffs must be positive finite numbers",
            ));
        }
        if !(self.gain_below_bmi < self.maintenance_below_bmi
            && self.maintenance_below_bmi < self.light_deficit_below_bmi)
        {
            return Err(ConfigError::InvalidRange(
                "Diet tier BMI cutoffs must be ascending (gain < maintenance < light deficit)",
            ));
        }
        if !(self.lower_ratio > 0.0
            && self.lower_ratio < 1.0
            && 1.0 < self.upper_ratio
            && self.upper_ratio < self.light_deficit_ratio)
        {
            return Err(ConfigError::InvalidRange(
                "Diet tier ratios must satisfy 0 < lower < 1 < upper < light deficit",
            ));
        }
        Ok(())
    }
}
