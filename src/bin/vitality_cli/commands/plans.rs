// ABOUTME: Engine-backed commands for vitality-cli: metrics, dashboard, diet, exercise, recipes
// ABOUTME: Every command recomputes from the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use tracing::warn;
use vitality::errors::{AppError, AppResult};
use vitality::intelligence::metrics::{derive_metrics, DerivedMetrics};
use vitality::intelligence::plans::WEEK_DAYS;
use vitality::intelligence::{
    build_dashboard, compose_exercise_day, compose_menu_day, compose_weekly_exercise,
    compose_weekly_menu, filter_recipes, select_exercise_tier, RecipeCatalog,
};
use vitality::logging::AppLogger;
use vitality::models::Profile;

type Result<T> = AppResult<T>;

use super::Context;
use crate::helpers::display::{
    display_dashboard, display_exercise_day, display_menu_day, display_metrics,
    display_plan_header, display_recipe, display_recipe_list,
};

fn metrics_for(ctx: &Context, profile: &Profile) -> Result<DerivedMetrics> {
    derive_metrics(profile, ctx.intelligence).map_err(|missing| {
        warn!(%missing, "Cannot derive metrics");
        AppError::missing_field(missing.missing.first().map_or_else(
            || "height".to_owned(),
            ToString::to_string,
        ))
        .with_details(serde_json::json!({ "insufficient": missing }))
    })
}

fn day_label(day_index: usize) -> &'static str {
    WEEK_DAYS.get(day_index).copied().unwrap_or("?")
}

/// Print the derived metrics of the stored profile
pub async fn metrics(ctx: &Context) -> Result<()> {
    let profile = ctx.require_profile().await?;
    let metrics = metrics_for(ctx, &profile)?;
    display_metrics(&profile, &metrics);
    Ok(())
}

/// Print the dashboard summary
pub async fn dashboard(ctx: &Context) -> Result<()> {
    let profile = ctx.require_profile().await?;
    let dashboard = build_dashboard(&profile, ctx.intelligence, ctx.plans);
    display_dashboard(&dashboard);
    Ok(())
}

/// Print the composed menu for the week or a single day
pub async fn diet(ctx: &Context, day: Option<usize>) -> Result<()> {
    let profile = ctx.require_profile().await?;
    let metrics = metrics_for(ctx, &profile)?;
    let conditions = profile.active_comorbidities();
    AppLogger::log_command("diet", metrics.diet_tier);

    let model = metrics.diet_tier.model();
    display_plan_header(model.title, model.description);
    if let Some(day_index) = day {
        let menu = compose_menu_day(metrics.diet_tier, conditions, day_index, ctx.plans)?;
        display_menu_day(day_label(day_index), &menu);
    } else {
        let week = compose_weekly_menu(metrics.diet_tier, conditions, ctx.plans);
        for (day_index, menu) in week.days.iter().enumerate() {
            display_menu_day(day_label(day_index), menu);
        }
    }
    Ok(())
}

/// Print the composed exercise plan for the week or a single day
pub async fn exercise(ctx: &Context, day: Option<usize>) -> Result<()> {
    let profile = ctx.require_profile().await?;
    let tier = select_exercise_tier(profile.activity_profile.tag());
    let conditions = profile.active_comorbidities();
    AppLogger::log_command("exercise", format!("{tier:?}"));

    let plan = tier.plan();
    display_plan_header(plan.name, plan.description);
    println!(
        "   Intensidade: {} | Duração: {} | Foco: {}",
        plan.intensity, plan.duration, plan.focus
    );
    if let Some(day_index) = day {
        let activities = compose_exercise_day(tier, conditions, day_index, ctx.plans)?;
        display_exercise_day(day_label(day_index), &activities);
    } else {
        let week = compose_weekly_exercise(tier, conditions, ctx.plans);
        for (day_index, activities) in week.days.iter().enumerate() {
            display_exercise_day(day_label(day_index), activities);
        }
    }
    Ok(())
}

/// Print the recipes recommended for the profile
pub async fn recipes(ctx: &Context) -> Result<()> {
    let profile = ctx.require_profile().await?;
    let metrics = metrics_for(ctx, &profile)?;
    let recommended = filter_recipes(
        metrics.diet_tier,
        profile.active_comorbidities(),
        ctx.recipes,
    );
    display_recipe_list(&recommended);
    Ok(())
}

/// Print one recipe from the built-in catalog
pub fn recipe(id: &str) -> Result<()> {
    let recipe = RecipeCatalog::builtin()
        .find(id)
        .ok_or_else(|| AppError::not_found(format!("Recipe '{id}'")).with_resource_id(id))?;
    display_recipe(recipe);
    Ok(())
}
