// ABOUTME: Integration tests for weekly plan composition over the built-in catalog
// ABOUTME: Checks identity, ordered union, the slot cap, and condition guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::array;
use vitality::constants::plans::MENU_SLOT_ITEM_CAP;
use vitality::errors::ErrorCode;
use vitality::intelligence::plans::{
    comorbidity_guidance, ComorbidityPlan, ConditionDiet, ConditionExercise, MealSlot, MenuDay,
    PlanKey, PlanSource,
};
use vitality::intelligence::{
    compose_exercise_day, compose_menu_day, compose_weekly_exercise, compose_weekly_menu,
    DietTier, ExerciseTier, PlanCatalog,
};
use vitality::models::Comorbidity;

fn breakfast_only_plan(items: &[&str]) -> ComorbidityPlan {
    let day = MenuDay {
        breakfast: items.iter().map(|item| (*item).to_owned()).collect(),
        ..MenuDay::default()
    };
    ComorbidityPlan {
        diet: ConditionDiet {
            title: "Teste".to_owned(),
            content: "Cardápio de teste".to_owned(),
            weekly_menu: Some(array::from_fn(|_| day.clone())),
        },
        exercise: ConditionExercise {
            title: "Teste".to_owned(),
            content: "Sem tabela".to_owned(),
            weekly_exercise: None,
        },
    }
}

#[test]
fn test_no_conditions_returns_base_tables() {
    let catalog = PlanCatalog::builtin();
    for tier in DietTier::ALL {
        let composed = compose_weekly_menu(tier, &[], catalog);
        assert_eq!(composed.source, PlanSource::Base);
        assert_eq!(&composed.days, catalog.base_menu(tier));
    }
    for tier in ExerciseTier::ALL {
        let composed = compose_weekly_exercise(tier, &[], catalog);
        assert_eq!(&composed.days, catalog.base_week(tier));
    }
}

#[test]
fn test_union_is_ordered_and_deduplicated() {
    let catalog = PlanCatalog::builtin()
        .clone()
        .with_comorbidity_plan(PlanKey::Asthma, breakfast_only_plan(&["X", "Y"]))
        .with_comorbidity_plan(PlanKey::KidneyDisease, breakfast_only_plan(&["Y", "Z"]));

    let monday = compose_menu_day(
        DietTier::Maintenance,
        &[Comorbidity::Asthma, Comorbidity::KidneyDisease],
        0,
        &catalog,
    )
    .unwrap();
    assert_eq!(monday.breakfast, vec!["X", "Y", "Z"]);
    assert!(monday.lunch.is_empty());
}

#[test]
fn test_every_slot_respects_cap() {
    let all = [
        Comorbidity::Diabetes,
        Comorbidity::Hypertension,
        Comorbidity::HeartDisease,
        Comorbidity::Asthma,
        Comorbidity::KidneyDisease,
    ];
    let composed = compose_weekly_menu(DietTier::Loss, &all, PlanCatalog::builtin());
    assert_eq!(composed.source, PlanSource::Merged);
    for day in &composed.days {
        for slot in MealSlot::ALL {
            assert!(day.slot(slot).len() <= MENU_SLOT_ITEM_CAP);
        }
    }
}

#[test]
fn test_unknown_condition_uses_general_guidance() {
    let catalog = PlanCatalog::builtin();
    let other = [Comorbidity::from_label("Fibromialgia")];

    let menu = compose_weekly_menu(DietTier::Gain, &other, catalog);
    assert_eq!(menu.source, PlanSource::Merged);
    assert_eq!(menu.days[0].breakfast, vec!["Iogurte + granola", "Fruta"]);

    let exercise = compose_weekly_exercise(ExerciseTier::Active, &other, catalog);
    assert_eq!(exercise.source, PlanSource::Base);

    let guidance = comorbidity_guidance(&other, None, catalog);
    assert_eq!(guidance.conditions[0].plan, Some(PlanKey::General));
}

#[test]
fn test_day_index_out_of_range() {
    let catalog = PlanCatalog::builtin();
    let err = compose_menu_day(DietTier::Gain, &[], 7, catalog).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    let err = compose_exercise_day(ExerciseTier::Fitness, &[], 9, catalog).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(compose_exercise_day(ExerciseTier::Fitness, &[], 6, catalog).is_ok());
}

#[test]
fn test_guidance_keeps_selection_order_and_note() {
    let catalog = PlanCatalog::builtin();
    let guidance = comorbidity_guidance(
        &[Comorbidity::Hypertension, Comorbidity::Diabetes],
        Some("  enxaqueca  "),
        catalog,
    );
    let labels: Vec<&str> = guidance.conditions.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Hipertensão", "Diabetes"]);
    assert_eq!(guidance.other_note.as_deref(), Some("enxaqueca"));

    let blank = comorbidity_guidance(&[], Some("   "), catalog);
    assert!(blank.is_empty());
}
