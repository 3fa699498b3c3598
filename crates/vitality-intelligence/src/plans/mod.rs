// ABOUTME: Plan catalog: base weekly menus per diet tier, base weeks per exercise tier,
// ABOUTME: and per-comorbidity diet/exercise plans, plus the weekly merge that combines them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! # Plans
//!
//! [`PlanCatalog`] holds every static table the engine composes from. The built-in
//! catalog is assembled once and shared; tests and callers can assemble their own
//! with [`PlanCatalog::new`] and [`PlanCatalog::with_comorbidity_plan`].
//!
//! Weekly tables are fixed-size arrays of seven days, Monday first.

pub mod compose;
mod data;

pub use compose::{
    comorbidity_guidance, compose_exercise_day, compose_menu_day, compose_weekly_exercise,
    compose_weekly_menu, ComorbidityGuidance, ConditionGuidance,
};

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use vitality_core::constants::plans::DAYS_PER_WEEK;
use vitality_core::errors::{AppError, AppResult};
use vitality_core::models::Comorbidity;

use crate::diet::DietTier;
use crate::exercise::{ActivityRow, ExerciseTier};

/// Seven days of a weekly table, Monday first
pub type Week<D> = [D; DAYS_PER_WEEK];

/// pt-BR day names, Monday first
pub const WEEK_DAYS: Week<&str> = [
    "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado", "Domingo",
];

/// Breakfast, lunch, and dinner items of a static menu row
pub(crate) type MenuRow = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Meal slot of a menu day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Café da manhã
    Breakfast,
    /// Almoço
    Lunch,
    /// Jantar
    Dinner,
}

impl MealSlot {
    /// Slots in serving order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// pt-BR label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Café da Manhã",
            Self::Lunch => "Almoço",
            Self::Dinner => "Jantar",
        }
    }
}

/// Meals of one day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDay {
    /// Breakfast items
    pub breakfast: Vec<String>,
    /// Lunch items
    pub lunch: Vec<String>,
    /// Dinner items
    pub dinner: Vec<String>,
}

impl MenuDay {
    /// Items of one slot
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    fn from_row((breakfast, lunch, dinner): MenuRow) -> Self {
        Self {
            breakfast: owned(breakfast),
            lunch: owned(lunch),
            dinner: owned(dinner),
        }
    }
}

/// A named activity with its prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name, the deduplication key when merging
    pub name: String,
    /// Duration, sets, or other details
    pub details: String,
}

/// Activities of one day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDay {
    /// Activities in prescribed order
    pub activities: Vec<Activity>,
}

impl ExerciseDay {
    fn from_rows(rows: &[ActivityRow]) -> Self {
        Self {
            activities: rows
                .iter()
                .map(|(name, details)| Activity {
                    name: (*name).to_owned(),
                    details: (*details).to_owned(),
                })
                .collect(),
        }
    }
}

/// Diet side of a comorbidity plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDiet {
    /// Plan title
    pub title: String,
    /// Guidance text
    pub content: String,
    /// Weekly menu, when the plan defines one
    pub weekly_menu: Option<Week<MenuDay>>,
}

/// Exercise side of a comorbidity plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionExercise {
    /// Plan title
    pub title: String,
    /// Guidance text
    pub content: String,
    /// Weekly activities, when the plan defines them
    pub weekly_exercise: Option<Week<ExerciseDay>>,
}

/// Diet and exercise adjustments for one condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComorbidityPlan {
    /// Diet adjustments
    pub diet: ConditionDiet,
    /// Exercise adjustments
    pub exercise: ConditionExercise,
}

/// Key of a comorbidity plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKey {
    /// Diabetes plan
    Diabetes,
    /// Hypertension plan
    Hypertension,
    /// Heart disease plan
    HeartDisease,
    /// Asthma plan
    Asthma,
    /// Kidney disease plan
    KidneyDisease,
    /// Generic plan for anything else
    General,
}

impl PlanKey {
    /// Every plan key
    pub const ALL: [Self; 6] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::HeartDisease,
        Self::Asthma,
        Self::KidneyDisease,
        Self::General,
    ];

    /// Plan that covers a condition; unknown conditions get the generic plan
    #[must_use]
    pub const fn for_comorbidity(comorbidity: &Comorbidity) -> Self {
        match comorbidity {
            Comorbidity::Diabetes => Self::Diabetes,
            Comorbidity::Hypertension => Self::Hypertension,
            Comorbidity::HeartDisease => Self::HeartDisease,
            Comorbidity::Asthma => Self::Asthma,
            Comorbidity::KidneyDisease => Self::KidneyDisease,
            Comorbidity::Other(_) => Self::General,
        }
    }
}

/// One value per diet tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietTierTable<T> {
    /// Gain tier value
    pub gain: T,
    /// Maintenance tier value
    pub maintenance: T,
    /// Light deficit tier value
    pub light_deficit: T,
    /// Loss tier value
    pub loss: T,
}

impl<T> DietTierTable<T> {
    /// Build a table by evaluating `f` for each tier
    pub fn from_fn(mut f: impl FnMut(DietTier) -> T) -> Self {
        Self {
            gain: f(DietTier::Gain),
            maintenance: f(DietTier::Maintenance),
            light_deficit: f(DietTier::LightDeficit),
            loss: f(DietTier::Loss),
        }
    }

    /// Value for a tier
    #[must_use]
    pub const fn get(&self, tier: DietTier) -> &T {
        match tier {
            DietTier::Gain => &self.gain,
            DietTier::Maintenance => &self.maintenance,
            DietTier::LightDeficit => &self.light_deficit,
            DietTier::Loss => &self.loss,
        }
    }
}

/// One value per exercise tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTierTable<T> {
    /// Sedentary tier value
    pub sedentary: T,
    /// Active tier value
    pub active: T,
    /// Fitness tier value
    pub fitness: T,
    /// Amateur athlete tier value
    pub amateur_athlete: T,
    /// High-performance athlete tier value
    pub high_performance_athlete: T,
}

impl<T> ExerciseTierTable<T> {
    /// Build a table by evaluating `f` for each tier
    pub fn from_fn(mut f: impl FnMut(ExerciseTier) -> T) -> Self {
        Self {
            sedentary: f(ExerciseTier::Sedentary),
            active: f(ExerciseTier::Active),
            fitness: f(ExerciseTier::Fitness),
            amateur_athlete: f(ExerciseTier::AmateurAthlete),
            high_performance_athlete: f(ExerciseTier::HighPerformanceAthlete),
        }
    }

    /// Value for a tier
    #[must_use]
    pub const fn get(&self, tier: ExerciseTier) -> &T {
        match tier {
            ExerciseTier::Sedentary => &self.sedentary,
            ExerciseTier::Active => &self.active,
            ExerciseTier::Fitness => &self.fitness,
            ExerciseTier::AmateurAthlete => &self.amateur_athlete,
            ExerciseTier::HighPerformanceAthlete => &self.high_performance_athlete,
        }
    }
}

static BUILTIN_CATALOG: OnceLock<PlanCatalog> = OnceLock::new();

/// Every table plan composition draws from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    base_menus: DietTierTable<Week<MenuDay>>,
    base_weeks: ExerciseTierTable<Week<ExerciseDay>>,
    comorbidity_plans: HashMap<PlanKey, ComorbidityPlan>,
}

impl PlanCatalog {
    /// Assemble a catalog from explicit tables
    #[must_use]
    pub const fn new(
        base_menus: DietTierTable<Week<MenuDay>>,
        base_weeks: ExerciseTierTable<Week<ExerciseDay>>,
        comorbidity_plans: HashMap<PlanKey, ComorbidityPlan>,
    ) -> Self {
        Self {
            base_menus,
            base_weeks,
            comorbidity_plans,
        }
    }

    /// The shipped catalog, built on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOG.get_or_init(Self::build_builtin)
    }

    fn build_builtin() -> Self {
        let base_menus =
            DietTierTable::from_fn(|tier| data::base_menu(tier).map(MenuDay::from_row));
        let base_weeks =
            ExerciseTierTable::from_fn(|tier| tier.plan().week.map(ExerciseDay::from_rows));
        let comorbidity_plans = PlanKey::ALL
            .into_iter()
            .map(|key| (key, data::condition_plan(key).to_plan()))
            .collect();
        Self::new(base_menus, base_weeks, comorbidity_plans)
    }

    /// Replace or add the plan stored under `key`
    #[must_use]
    pub fn with_comorbidity_plan(mut self, key: PlanKey, plan: ComorbidityPlan) -> Self {
        self.comorbidity_plans.insert(key, plan);
        self
    }

    /// Base weekly menu of a diet tier
    #[must_use]
    pub const fn base_menu(&self, tier: DietTier) -> &Week<MenuDay> {
        self.base_menus.get(tier)
    }

    /// Base weekly activities of an exercise tier
    #[must_use]
    pub const fn base_week(&self, tier: ExerciseTier) -> &Week<ExerciseDay> {
        self.base_weeks.get(tier)
    }

    /// Plan stored under a key
    #[must_use]
    pub fn plan(&self, key: PlanKey) -> Option<&ComorbidityPlan> {
        self.comorbidity_plans.get(&key)
    }

    /// Plan covering a condition
    #[must_use]
    pub fn plan_for(&self, comorbidity: &Comorbidity) -> Option<&ComorbidityPlan> {
        self.plan(PlanKey::for_comorbidity(comorbidity))
    }
}

/// Where a composed weekly table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// The tier's base table, unmodified
    Base,
    /// Union of the selected conditions' tables
    Merged,
}

/// A weekly table ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedPlan<D> {
    /// Origin of the table
    pub source: PlanSource,
    /// Days, Monday first
    pub days: Week<D>,
}

impl<D> ComposedPlan<D> {
    /// Day for a weekday
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &D {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = &self.days;
        match weekday {
            Weekday::Mon => monday,
            Weekday::Tue => tuesday,
            Weekday::Wed => wednesday,
            Weekday::Thu => thursday,
            Weekday::Fri => friday,
            Weekday::Sat => saturday,
            Weekday::Sun => sunday,
        }
    }

    /// Day for an index, 0 being Monday
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for an index above 6
    pub fn day_at(&self, day_index: usize) -> AppResult<&D> {
        self.days.get(day_index).ok_or_else(|| {
            AppError::value_out_of_range(format!(
                "Day index must be between 0 and {}, got {day_index}",
                DAYS_PER_WEEK - 1
            ))
            .with_resource_id("day_index")
        })
    }
}
