// ABOUTME: Weight measurement entries of the weigh-in log
// ABOUTME: pt-BR timestamp formatting and the shared weight range check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{formats, limits};
use crate::errors::{AppError, AppResult};

/// Reject weights outside the accepted kilogram range
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the weight is not finite or outside 20-300 kg.
pub fn validate_weight(weight_kg: f64) -> AppResult<f64> {
    if weight_kg.is_finite() && (limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&weight_kg)
    {
        Ok(weight_kg)
    } else {
        Err(AppError::value_out_of_range(format!(
            "Weight must be between {} and {} kg, got {weight_kg}",
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG
        ))
        .with_resource_id("weight"))
    }
}

/// One weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighIn {
    /// Local time of the measurement, `dd/mm/yy HH:MM`
    #[serde(alias = "data")]
    pub recorded_at: String,
    /// Measured weight
    #[serde(alias = "peso")]
    pub weight_kg: f64,
}

impl WeighIn {
    /// Create an entry with an explicit timestamp label
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the weight is outside the accepted range.
    pub fn new(recorded_at: impl Into<String>, weight_kg: f64) -> AppResult<Self> {
        Ok(Self {
            recorded_at: recorded_at.into(),
            weight_kg: validate_weight(weight_kg)?,
        })
    }

    /// Create an entry stamped with the current local time
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the weight is outside the accepted range.
    pub fn now(weight_kg: f64) -> AppResult<Self> {
        Self::new(
            Local::now().format(formats::WEIGH_IN_TIMESTAMP).to_string(),
            weight_kg,
        )
    }

    /// Parse the timestamp label, if it follows the standard format
    #[must_use]
    pub fn recorded_at_parsed(&self) -> Option<NaiveDateTime> {
        // older entries carry a comma after the date
        let normalized = self.recorded_at.replace(',', "");
        NaiveDateTime::parse_from_str(normalized.trim(), formats::WEIGH_IN_TIMESTAMP).ok()
    }
}
