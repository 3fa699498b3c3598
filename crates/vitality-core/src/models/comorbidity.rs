// ABOUTME: Chronic condition vocabulary with an explicit free-text variant
// ABOUTME: Parses English and Portuguese labels and serializes to the canonical English label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A chronic condition selected on the profile
///
/// Labels outside the fixed vocabulary are kept verbatim in [`Comorbidity::Other`]
/// and resolve to the generic plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Comorbidity {
    /// Diabetes mellitus
    Diabetes,
    /// High blood pressure
    Hypertension,
    /// Cardiovascular disease
    HeartDisease,
    /// Asthma
    Asthma,
    /// Chronic kidney disease
    KidneyDisease,
    /// Any condition outside the fixed vocabulary
    Other(String),
}

impl Comorbidity {
    /// Conditions with a dedicated plan, in selection-list order
    pub const KNOWN: [Self; 5] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::HeartDisease,
        Self::Asthma,
        Self::KidneyDisease,
    ];

    /// Parse a label case-insensitively; unknown labels become `Other`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "diabetes" => Self::Diabetes,
            "hypertension" | "hipertensão" | "hipertensao" => Self::Hypertension,
            "heart disease" | "heart_disease" | "doença cardíaca" | "doenca cardiaca" => {
                Self::HeartDisease
            }
            "asthma" | "asma" => Self::Asthma,
            "kidney disease" | "kidney_disease" | "doença renal" | "doenca renal" => {
                Self::KidneyDisease
            }
            _ => {
                debug!(label = trimmed, "Unrecognized comorbidity label kept as other");
                Self::Other(trimmed.to_owned())
            }
        }
    }

    /// Canonical English label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hypertension",
            Self::HeartDisease => "Heart Disease",
            Self::Asthma => "Asthma",
            Self::KidneyDisease => "Kidney Disease",
            Self::Other(label) => label,
        }
    }

    /// Label shown in the pt-BR content
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Hypertension => "Hipertensão",
            Self::HeartDisease => "Doença cardíaca",
            Self::Asthma => "Asma",
            Self::KidneyDisease => "Doença renal",
            Self::Other(label) => label,
        }
    }

    /// Whether this condition has no dedicated plan
    #[must_use]
    pub const fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<String> for Comorbidity {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for Comorbidity {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<Comorbidity> for String {
    fn from(comorbidity: Comorbidity) -> Self {
        match comorbidity {
            Comorbidity::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl FromStr for Comorbidity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for Comorbidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
