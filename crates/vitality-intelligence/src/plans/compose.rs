// ABOUTME: Weekly plan composition: base tier tables or the union of comorbidity tables
// ABOUTME: Also builds the per-condition guidance panels shown next to the plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::Serialize;
use std::array;
use std::collections::HashSet;
use tracing::debug;
use vitality_core::constants::plans::MENU_SLOT_ITEM_CAP;
use vitality_core::errors::AppResult;
use vitality_core::models::Comorbidity;

use super::{
    Activity, ComorbidityPlan, ComposedPlan, ExerciseDay, MenuDay, PlanCatalog, PlanKey,
    PlanSource, Week,
};
use crate::diet::DietTier;
use crate::exercise::ExerciseTier;

const FALLBACK_DIET_TITLE: &str = "Dieta";
const FALLBACK_EXERCISE_TITLE: &str = "Exercícios";
const FALLBACK_CONTENT: &str = "Recomendações gerais. Consulte profissional.";

/// Order-preserving union of string lists, truncated to `cap`
fn ordered_union<'a>(lists: impl Iterator<Item = &'a [String]>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    lists
        .flatten()
        .filter(|item| seen.insert(item.as_str()))
        .take(cap)
        .cloned()
        .collect()
}

fn merge_menu_day(menus: &[&Week<MenuDay>], day_index: usize) -> MenuDay {
    let slot = |pick: fn(&MenuDay) -> &[String]| {
        ordered_union(
            menus.iter().map(|week| pick(&week[day_index])),
            MENU_SLOT_ITEM_CAP,
        )
    };
    MenuDay {
        breakfast: slot(|day| &day.breakfast),
        lunch: slot(|day| &day.lunch),
        dinner: slot(|day| &day.dinner),
    }
}

fn merge_exercise_day(weeks: &[&Week<ExerciseDay>], day_index: usize) -> ExerciseDay {
    let mut seen = HashSet::new();
    let activities = weeks
        .iter()
        .flat_map(|week| &week[day_index].activities)
        .filter(|activity| seen.insert(activity.name.as_str()))
        .cloned()
        .collect::<Vec<Activity>>();
    ExerciseDay { activities }
}

/// Weekly menu for a diet tier, merged with the selected conditions' menus
#[must_use]
pub fn compose_weekly_menu(
    tier: DietTier,
    comorbidities: &[Comorbidity],
    catalog: &PlanCatalog,
) -> ComposedPlan<MenuDay> {
    let menus: Vec<&Week<MenuDay>> = comorbidities
        .iter()
        .filter_map(|condition| catalog.plan_for(condition))
        .filter_map(|plan| plan.diet.weekly_menu.as_ref())
        .collect();

    if menus.is_empty() {
        debug!(%tier, "Using base weekly menu");
        return ComposedPlan {
            source: PlanSource::Base,
            days: catalog.base_menu(tier).clone(),
        };
    }

    debug!(%tier, merged_tables = menus.len(), "Merging comorbidity weekly menus");
    ComposedPlan {
        source: PlanSource::Merged,
        days: array::from_fn(|day_index| merge_menu_day(&menus, day_index)),
    }
}

/// Weekly activities for an exercise tier, merged with the selected conditions' weeks
#[must_use]
pub fn compose_weekly_exercise(
    tier: ExerciseTier,
    comorbidities: &[Comorbidity],
    catalog: &PlanCatalog,
) -> ComposedPlan<ExerciseDay> {
    let weeks: Vec<&Week<ExerciseDay>> = comorbidities
        .iter()
        .filter_map(|condition| catalog.plan_for(condition))
        .filter_map(|plan| plan.exercise.weekly_exercise.as_ref())
        .collect();

    if weeks.is_empty() {
        debug!(?tier, "Using base exercise week");
        return ComposedPlan {
            source: PlanSource::Base,
            days: catalog.base_week(tier).clone(),
        };
    }

    debug!(?tier, merged_tables = weeks.len(), "Merging comorbidity exercise weeks");
    ComposedPlan {
        source: PlanSource::Merged,
        days: array::from_fn(|day_index| merge_exercise_day(&weeks, day_index)),
    }
}

/// Menu of a single day, 0 being Monday
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `day_index` is above 6
pub fn compose_menu_day(
    tier: DietTier,
    comorbidities: &[Comorbidity],
    day_index: usize,
    catalog: &PlanCatalog,
) -> AppResult<MenuDay> {
    compose_weekly_menu(tier, comorbidities, catalog)
        .day_at(day_index)
        .cloned()
}

/// Activities of a single day, 0 being Monday
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `day_index` is above 6
pub fn compose_exercise_day(
    tier: ExerciseTier,
    comorbidities: &[Comorbidity],
    day_index: usize,
    catalog: &PlanCatalog,
) -> AppResult<ExerciseDay> {
    compose_weekly_exercise(tier, comorbidities, catalog)
        .day_at(day_index)
        .cloned()
}

/// Diet and exercise guidance for one selected condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionGuidance {
    /// Condition label as shown to the user
    pub label: String,
    /// Diet plan title
    pub diet_title: String,
    /// Diet guidance text
    pub diet_content: String,
    /// Exercise plan title
    pub exercise_title: String,
    /// Exercise guidance text
    pub exercise_content: String,
    /// Catalog plan the texts came from; `None` when the catalog has no plan for it
    pub plan: Option<PlanKey>,
}

impl ConditionGuidance {
    /// Whether a condition-specific plan, not the generic one, backs this entry
    #[must_use]
    pub fn has_dedicated_plan(&self) -> bool {
        self.plan.is_some_and(|key| key != PlanKey::General)
    }
}

/// Guidance panels for every selected condition plus the free-text note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComorbidityGuidance {
    /// One entry per selected condition, in selection order
    pub conditions: Vec<ConditionGuidance>,
    /// Free-text description of other conditions
    pub other_note: Option<String>,
}

impl ComorbidityGuidance {
    /// No conditions and no note
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.other_note.is_none()
    }
}

/// Build the guidance panels for the selected conditions
#[must_use]
pub fn comorbidity_guidance(
    comorbidities: &[Comorbidity],
    other_note: Option<&str>,
    catalog: &PlanCatalog,
) -> ComorbidityGuidance {
    let conditions = comorbidities
        .iter()
        .map(|condition| {
            let key = PlanKey::for_comorbidity(condition);
            let plan = catalog.plan(key);
            let text = |pick: fn(&ComorbidityPlan) -> &str| {
                plan.map_or(FALLBACK_CONTENT, pick).to_owned()
            };
            ConditionGuidance {
                label: condition.display_label().to_owned(),
                diet_title: plan
                    .map_or(FALLBACK_DIET_TITLE, |p| p.diet.title.as_str())
                    .to_owned(),
                diet_content: text(|p| &p.diet.content),
                exercise_title: plan
                    .map_or(FALLBACK_EXERCISE_TITLE, |p| p.exercise.title.as_str())
                    .to_owned(),
                exercise_content: text(|p| &p.exercise.content),
                plan: plan.map(|_| key),
            }
        })
        .collect();

    ComorbidityGuidance {
        conditions,
        other_note: other_note
            .map(str::trim)
            .filter(|note| !note.is_empty())
            .map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::{ConditionDiet, ConditionExercise};
    use chrono::Weekday;
    use vitality_core::errors::ErrorCode;

    fn menu_day(breakfast: &[&str]) -> MenuDay {
        MenuDay {
            breakfast: breakfast.iter().map(|s| (*s).to_owned()).collect(),
            ..MenuDay::default()
        }
    }

    fn menu_plan(breakfast: &[&str]) -> ComorbidityPlan {
        ComorbidityPlan {
            diet: ConditionDiet {
                title: "Dieta".to_owned(),
                content: "Conteúdo".to_owned(),
                weekly_menu: Some(array::from_fn(|_| menu_day(breakfast))),
            },
            exercise: ConditionExercise {
                title: "Exercício".to_owned(),
                content: "Conteúdo".to_owned(),
                weekly_exercise: None,
            },
        }
    }

    #[test]
    fn test_empty_selection_returns_base_menu() {
        let catalog = PlanCatalog::builtin();
        for tier in DietTier::ALL {
            let plan = compose_weekly_menu(tier, &[], catalog);
            assert_eq!(plan.source, PlanSource::Base);
            assert_eq!(&plan.days, catalog.base_menu(tier));
        }
    }

    #[test]
    fn test_union_preserves_first_seen_order() {
        let catalog = PlanCatalog::builtin()
            .clone()
            .with_comorbidity_plan(PlanKey::Diabetes, menu_plan(&["X", "Y"]))
            .with_comorbidity_plan(PlanKey::Asthma, menu_plan(&["Y", "Z"]));
        let plan = compose_weekly_menu(
            DietTier::Maintenance,
            &[Comorbidity::Diabetes, Comorbidity::Asthma],
            &catalog,
        );
        assert_eq!(plan.source, PlanSource::Merged);
        assert_eq!(plan.day(Weekday::Wed).breakfast, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_menu_slots_are_capped() {
        let catalog = PlanCatalog::builtin()
            .clone()
            .with_comorbidity_plan(PlanKey::Diabetes, menu_plan(&["a", "b", "c", "d", "e"]))
            .with_comorbidity_plan(PlanKey::Hypertension, menu_plan(&["f", "g", "h", "i", "j"]));
        let plan = compose_weekly_menu(
            DietTier::Gain,
            &[Comorbidity::Diabetes, Comorbidity::Hypertension],
            &catalog,
        );
        for day in &plan.days {
            assert_eq!(day.breakfast.len(), MENU_SLOT_ITEM_CAP);
            assert_eq!(day.breakfast.last().map(String::as_str), Some("h"));
        }
    }

    #[test]
    fn test_builtin_merge_never_exceeds_cap() {
        let all: Vec<Comorbidity> = Comorbidity::KNOWN.to_vec();
        let plan = compose_weekly_menu(DietTier::Loss, &all, PlanCatalog::builtin());
        assert!(plan.days.iter().all(|day| {
            day.breakfast.len() <= MENU_SLOT_ITEM_CAP
                && day.lunch.len() <= MENU_SLOT_ITEM_CAP
                && day.dinner.len() <= MENU_SLOT_ITEM_CAP
        }));
    }

    #[test]
    fn test_exercise_merge_dedups_by_name() {
        let catalog = PlanCatalog::builtin();
        let plan = compose_weekly_exercise(
            ExerciseTier::Fitness,
            &[Comorbidity::Diabetes, Comorbidity::Hypertension],
            catalog,
        );
        assert_eq!(plan.source, PlanSource::Merged);
        let monday = plan.day(Weekday::Mon);
        let walks: Vec<&Activity> = monday
            .activities
            .iter()
            .filter(|activity| activity.name == "Caminhada moderada")
            .collect();
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].details, "30 minutos em ritmo confortável");
        assert_eq!(monday.activities.len(), 2);
    }

    #[test]
    fn test_other_alone_falls_back_to_base_week() {
        let catalog = PlanCatalog::builtin();
        let other = [Comorbidity::Other("Artrite".to_owned())];
        let plan = compose_weekly_exercise(ExerciseTier::Active, &other, catalog);
        assert_eq!(plan.source, PlanSource::Base);
        assert_eq!(&plan.days, catalog.base_week(ExerciseTier::Active));

        let menu = compose_weekly_menu(DietTier::Maintenance, &other, catalog);
        assert_eq!(menu.source, PlanSource::Merged);
    }

    #[test]
    fn test_day_index_out_of_range() {
        let catalog = PlanCatalog::builtin();
        let err = compose_menu_day(DietTier::Gain, &[], 7, catalog).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        let err = compose_exercise_day(ExerciseTier::Sedentary, &[], 7, catalog).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let sunday = compose_menu_day(DietTier::Gain, &[], 6, catalog).unwrap();
        assert_eq!(sunday.breakfast[0], "Ovos mexidos");
    }

    #[test]
    fn test_guidance_for_known_and_unknown_conditions() {
        let guidance = comorbidity_guidance(
            &[Comorbidity::Asthma, Comorbidity::Other("Artrite".to_owned())],
            Some("  alergia a lactose "),
            PlanCatalog::builtin(),
        );
        assert_eq!(guidance.conditions.len(), 2);
        assert_eq!(guidance.conditions[0].label, "Asma");
        assert!(guidance.conditions[0].has_dedicated_plan());
        assert_eq!(guidance.conditions[1].diet_title, "Recomendações Gerais");
        assert_eq!(guidance.conditions[1].plan, Some(PlanKey::General));
        assert!(!guidance.conditions[1].has_dedicated_plan());
        assert_eq!(guidance.other_note.as_deref(), Some("alergia a lactose"));

        assert!(comorbidity_guidance(&[], Some("   "), PlanCatalog::builtin()).is_empty());
    }

    #[test]
    fn test_guidance_without_catalog_plan_uses_fallback_text() {
        let mut catalog = PlanCatalog::builtin().clone();
        catalog.comorbidity_plans.remove(&PlanKey::KidneyDisease);
        let guidance = comorbidity_guidance(&[Comorbidity::KidneyDisease], None, &catalog);
        let entry = &guidance.conditions[0];
        assert_eq!(entry.plan, None);
        assert_eq!(entry.diet_title, "Dieta");
        assert_eq!(entry.exercise_title, "Exercícios");
        assert_eq!(entry.diet_content, "Recomendações gerais. Consulte profissional.");
    }
}
