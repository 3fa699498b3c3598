// ABOUTME: Weigh-in commands for vitality-cli
// ABOUTME: Entries are numbered from 1 on screen and mapped to log positions here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use vitality::errors::{AppError, AppResult};
use vitality::intelligence::metrics::weight_history_series;
use vitality::logging::AppLogger;

type Result<T> = AppResult<T>;

use super::Context;
use crate::helpers::display::display_history;

fn position(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| AppError::not_found("Weigh-in #0").with_resource_id("0"))
}

/// Record a weigh-in now
pub async fn add(ctx: &Context, weight: &str) -> Result<()> {
    AppLogger::log_command("weigh-in add", weight);
    let entry = ctx.weigh_ins.append(weight).await?;
    println!(
        "Success Recorded {:.1} kg at {}",
        entry.weight_kg, entry.recorded_at
    );
    Ok(())
}

/// Print the history with BMI per entry
pub async fn list(ctx: &Context) -> Result<()> {
    let entries = ctx.weigh_ins.list().await?;
    let height_m = ctx
        .profiles
        .load()
        .await?
        .and_then(|profile| profile.height_m());
    display_history(&weight_history_series(&entries, height_m));
    Ok(())
}

/// Change the weight of an entry
pub async fn edit(ctx: &Context, number: usize, weight: &str) -> Result<()> {
    AppLogger::log_command("weigh-in edit", number);
    let entry = ctx.weigh_ins.edit(position(number)?, weight).await?;
    println!(
        "Success Entry {number} ({}) now {:.1} kg",
        entry.recorded_at, entry.weight_kg
    );
    Ok(())
}

/// Delete an entry
pub async fn delete(ctx: &Context, number: usize) -> Result<()> {
    AppLogger::log_command("weigh-in delete", number);
    let entry = ctx.weigh_ins.delete(position(number)?).await?;
    println!(
        "Success Deleted entry {number} ({}, {:.1} kg)",
        entry.recorded_at, entry.weight_kg
    );
    Ok(())
}
