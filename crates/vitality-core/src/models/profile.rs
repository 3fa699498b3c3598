// ABOUTME: User profile record with registration-form validation rules
// ABOUTME: Gender and activity-profile enums plus locale-aware height and weight parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::comorbidity::Comorbidity;
use super::serde_helpers::{lenient_u32, text_or_number};
use super::weigh_in::validate_weight;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Parse a decimal typed with either a comma or a dot separator
///
/// Returns `None` for blank, non-numeric, non-finite, or non-positive input.
#[must_use]
pub fn parse_locale_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Gender as entered on the profile form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    #[serde(alias = "masculino")]
    Male,
    /// Female
    #[serde(alias = "feminino")]
    Female,
    /// Other or not informed; uses the male tables
    #[default]
    #[serde(alias = "outro", other)]
    Other,
}

impl Gender {
    /// Parse gender from English or Portuguese text, defaulting to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "masculino" => Self::Male,
            "female" | "f" | "feminino" => Self::Female,
            _ => Self::Other,
        }
    }

    /// pt-BR label
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Male => "Masculino",
            Self::Female => "Feminino",
            Self::Other => "Outro",
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityProfile {
    /// No regular exercise
    #[serde(alias = "sedentario")]
    Sedentary,
    /// Exercise once or twice a week
    #[serde(alias = "ativo")]
    Active,
    /// Exercise three to five times a week
    Fitness,
    /// Amateur athlete
    #[serde(alias = "atleta_amador")]
    AmateurAthlete,
    /// High-performance athlete
    #[serde(alias = "atleta_alto_rendimento")]
    HighPerformanceAthlete,
    /// Not informed
    #[default]
    #[serde(alias = "outro", other)]
    Other,
}

impl ActivityProfile {
    /// Parse an activity tag from English or Portuguese text, defaulting to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" | "sedentario" | "sedentário" => Self::Sedentary,
            "active" | "ativo" => Self::Active,
            "fitness" => Self::Fitness,
            "amateur_athlete" | "atleta_amador" => Self::AmateurAthlete,
            "high_performance_athlete" | "atleta_alto_rendimento" => Self::HighPerformanceAthlete,
            "" | "other" | "outro" => Self::Other,
            other => {
                warn!(activity_profile = other, "Unknown activity profile");
                Self::Other
            }
        }
    }

    /// Stable tag fed to the exercise-tier keyword matcher
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Active => "active",
            Self::Fitness => "fitness",
            Self::AmateurAthlete => "amateur_athlete",
            Self::HighPerformanceAthlete => "high_performance_athlete",
            Self::Other => "other",
        }
    }

    /// pt-BR label
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentário",
            Self::Active => "Ativo",
            Self::Fitness => "Fitness",
            Self::AmateurAthlete => "Atleta amador",
            Self::HighPerformanceAthlete => "Atleta de alto rendimento",
            Self::Other => "Outro",
        }
    }
}

impl fmt::Display for ActivityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The single profile record of an installation
///
/// Height and weight keep the text the user typed so a comma decimal round-trips
/// unchanged; use [`Profile::height_m`] and [`Profile::weight_kg`] for numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name
    #[serde(alias = "nome")]
    pub name: String,
    /// Age in years
    #[serde(alias = "idade", deserialize_with = "lenient_u32")]
    pub age: u32,
    /// Gender
    #[serde(alias = "genero")]
    pub gender: Gender,
    /// Height in meters, as entered
    #[serde(alias = "altura", deserialize_with = "text_or_number")]
    pub height: String,
    /// Weight in kilograms, as entered
    #[serde(alias = "peso", deserialize_with = "text_or_number")]
    pub weight: String,
    /// Activity level
    #[serde(alias = "estado")]
    pub activity_profile: ActivityProfile,
    /// Whether the user reported chronic conditions
    #[serde(alias = "hasComorbidities")]
    pub has_comorbidities: bool,
    /// Selected conditions, first-selected first
    #[serde(alias = "comorbidades")]
    pub comorbidities: Vec<Comorbidity>,
    /// Free-text description of conditions outside the list
    #[serde(alias = "comorbidadeOutros")]
    pub other_comorbidity: String,
}

impl Profile {
    /// Height in meters, if present and numeric
    #[must_use]
    pub fn height_m(&self) -> Option<f64> {
        parse_locale_decimal(&self.height)
    }

    /// Weight in kilograms, if present and numeric
    #[must_use]
    pub fn weight_kg(&self) -> Option<f64> {
        parse_locale_decimal(&self.weight)
    }

    /// Conditions that drive plan selection
    ///
    /// The list is ignored while `has_comorbidities` is off.
    #[must_use]
    pub fn active_comorbidities(&self) -> &[Comorbidity] {
        if self.has_comorbidities {
            &self.comorbidities
        } else {
            &[]
        }
    }

    /// Trimmed free-text condition note, if comorbidities are enabled and it is not blank
    #[must_use]
    pub fn other_comorbidity_note(&self) -> Option<&str> {
        let note = self.other_comorbidity.trim();
        (self.has_comorbidities && !note.is_empty()).then_some(note)
    }

    /// Apply the registration form rules
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField`, `InvalidInput`, or `ValueOutOfRange` for the
    /// first rule the profile breaks.
    pub fn validate(&self) -> AppResult<()> {
        self.validate_name()?;

        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::value_out_of_range(format!(
                "Age must be between {} and {} years",
                limits::MIN_AGE,
                limits::MAX_AGE
            ))
            .with_resource_id("age"));
        }

        let height = Self::required_decimal(&self.height, "height")?;
        if !(limits::MIN_HEIGHT_M..=limits::MAX_HEIGHT_M).contains(&height) {
            return Err(AppError::value_out_of_range(format!(
                "Height must be between {} and {} m",
                limits::MIN_HEIGHT_M,
                limits::MAX_HEIGHT_M
            ))
            .with_resource_id("height"));
        }

        let weight = Self::required_decimal(&self.weight, "weight")?;
        validate_weight(weight)?;

        if self.has_comorbidities
            && self.comorbidities.is_empty()
            && self.other_comorbidity.trim().chars().count() <= limits::MIN_OTHER_COMORBIDITY_CHARS
        {
            return Err(AppError::missing_field("comorbidities").with_details(
                serde_json::json!({
                    "hint": "select at least one condition or describe it in other_comorbidity"
                }),
            ));
        }

        Ok(())
    }

    fn validate_name(&self) -> AppResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if name.chars().count() < limits::MIN_NAME_CHARS {
            return Err(AppError::invalid_input(format!(
                "Name must have at least {} characters",
                limits::MIN_NAME_CHARS
            ))
            .with_resource_id("name"));
        }
        if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return Err(
                AppError::invalid_input("Name may only contain letters").with_resource_id("name")
            );
        }
        Ok(())
    }

    fn required_decimal(raw: &str, field: &str) -> AppResult<f64> {
        if raw.trim().is_empty() {
            return Err(AppError::missing_field(field));
        }
        parse_locale_decimal(raw).ok_or_else(|| {
            AppError::invalid_input(format!("{field} must be a positive number, got '{raw}'"))
                .with_resource_id(field)
        })
    }
}
