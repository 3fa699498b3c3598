// ABOUTME: Constants module with domain-separated organization
// ABOUTME: BMI bands, profile limits, plan caps, and storage keys for the Vitality tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Values that users may want to tune (ideal-weight constants, diet-tier cutoffs) live in
//! the intelligence configuration instead; the defaults there reference this module.

/// BMI cutoffs shared by the weight delta, diet tiers, and dashboard focus texts
pub mod bmi {
    /// Below this BMI the user is asked to gain weight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Above this BMI the user is asked to lose weight
    pub const OVERWEIGHT_ABOVE: f64 = 25.0;
    /// Lower bound of the obesity band used by diet tiers and the dashboard
    pub const OBESITY_FROM: f64 = 30.0;
}

/// Upper bounds of the gender-specific weight classification bands
///
/// Comparison is strict less-than: a BMI exactly on a bound belongs to the next band.
pub mod classification {
    /// Female table (underweight, ideal, slightly above, overweight)
    pub const FEMALE_UPPER_BOUNDS: [f64; 4] = [19.1, 25.8, 27.3, 32.3];
    /// Male table, also applied to `Gender::Other`
    pub const MALE_UPPER_BOUNDS: [f64; 4] = [20.7, 26.4, 27.8, 31.1];
}

/// Default ideal-weight constants (kg per square meter of height)
pub mod ideal_weight {
    /// Female constant
    pub const FEMALE_FACTOR: f64 = 21.5;
    /// Male constant, also applied to `Gender::Other`
    pub const MALE_FACTOR: f64 = 23.5;
}

/// Default diet-tier ratios against ideal weight
pub mod diet {
    /// Below `ideal * LOWER_RATIO` the gain tier applies
    pub const LOWER_RATIO: f64 = 0.97;
    /// Maintenance holds up to `ideal * UPPER_RATIO`
    pub const UPPER_RATIO: f64 = 1.03;
    /// Light deficit applies below `ideal * LIGHT_DEFICIT_RATIO`
    pub const LIGHT_DEFICIT_RATIO: f64 = 1.15;
}

/// Limits enforced on profile and weigh-in input
pub mod limits {
    /// Youngest accepted age
    pub const MIN_AGE: u32 = 12;
    /// Oldest accepted age
    pub const MAX_AGE: u32 = 120;
    /// Minimum height in meters
    pub const MIN_HEIGHT_M: f64 = 0.5;
    /// Maximum height in meters
    pub const MAX_HEIGHT_M: f64 = 2.5;
    /// Minimum weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Maximum weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum number of characters in a profile name
    pub const MIN_NAME_CHARS: usize = 3;
    /// Free-text comorbidity must exceed this many non-blank characters
    pub const MIN_OTHER_COMORBIDITY_CHARS: usize = 2;
}

/// Plan composition limits
pub mod plans {
    /// Days in a weekly table (Monday first)
    pub const DAYS_PER_WEEK: usize = 7;
    /// Maximum items kept in a merged menu slot
    pub const MENU_SLOT_ITEM_CAP: usize = 8;
    /// Maximum recipes returned by the recipe filter
    pub const MAX_RECOMMENDED_RECIPES: usize = 6;
}

/// Key-value storage keys
pub mod storage_keys {
    /// Single profile record
    pub const PROFILE: &str = "profile";
    /// Ordered weigh-in log
    pub const WEIGH_INS: &str = "weigh_ins";
    /// Nutritionist directory
    pub const NUTRITIONISTS: &str = "nutritionists";
    /// Every key owned by the application
    pub const ALL: [&str; 3] = [PROFILE, WEIGH_INS, NUTRITIONISTS];
}

/// Display formats
pub mod formats {
    /// pt-BR timestamp format used for weigh-in records
    pub const WEIGH_IN_TIMESTAMP: &str = "%d/%m/%y %H:%M";
}
