// ABOUTME: Static tables behind the built-in plan catalog
// ABOUTME: Base menus per diet tier and diet/exercise plans per condition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

mod conditions;
mod diet_menus;

use super::{
    ComorbidityPlan, ConditionDiet, ConditionExercise, ExerciseDay, MenuDay, MenuRow, PlanKey,
    Week,
};
use crate::diet::DietTier;
use crate::exercise::ActivityRow;

/// Static form of a [`ComorbidityPlan`]
pub(super) struct ConditionPlanRows {
    pub diet_title: &'static str,
    pub diet_content: &'static str,
    pub weekly_menu: Option<Week<MenuRow>>,
    pub exercise_title: &'static str,
    pub exercise_content: &'static str,
    pub weekly_exercise: Option<Week<&'static [ActivityRow]>>,
}

impl ConditionPlanRows {
    pub(super) fn to_plan(&self) -> ComorbidityPlan {
        ComorbidityPlan {
            diet: ConditionDiet {
                title: self.diet_title.to_owned(),
                content: self.diet_content.to_owned(),
                weekly_menu: self.weekly_menu.map(|week| week.map(MenuDay::from_row)),
            },
            exercise: ConditionExercise {
                title: self.exercise_title.to_owned(),
                content: self.exercise_content.to_owned(),
                weekly_exercise: self
                    .weekly_exercise
                    .map(|week| week.map(ExerciseDay::from_rows)),
            },
        }
    }
}

pub(super) const fn base_menu(tier: DietTier) -> Week<MenuRow> {
    match tier {
        DietTier::Gain => diet_menus::GAIN,
        DietTier::Maintenance => diet_menus::MAINTENANCE,
        DietTier::LightDeficit => diet_menus::LIGHT_DEFICIT,
        DietTier::Loss => diet_menus::LOSS,
    }
}

pub(super) const fn condition_plan(key: PlanKey) -> &'static ConditionPlanRows {
    match key {
        PlanKey::Diabetes => &conditions::DIABETES,
        PlanKey::Hypertension => &conditions::HYPERTENSION,
        PlanKey::HeartDisease => &conditions::HEART_DISEASE,
        PlanKey::Asthma => &conditions::ASTHMA,
        PlanKey::KidneyDisease => &conditions::KIDNEY_DISEASE,
        PlanKey::General => &conditions::GENERAL,
    }
}
