// ABOUTME: Profile commands for vitality-cli
// ABOUTME: Show, set (merging with the stored profile), and clear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use tracing::info;
use vitality::errors::AppResult;
use vitality::logging::AppLogger;
use vitality::models::{ActivityProfile, Comorbidity, Gender};

type Result<T> = AppResult<T>;

use super::Context;
use crate::helpers::display::display_profile;

/// Fields given on the command line; `None` keeps the stored value
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub activity: Option<String>,
    pub comorbidities: Vec<String>,
    pub other: Option<String>,
    pub no_comorbidities: bool,
}

/// Print the stored profile
pub async fn show(ctx: &Context) -> Result<()> {
    match ctx.profiles.load().await? {
        Some(profile) => display_profile(&profile),
        None => println!("No profile stored. Run `vitality-cli profile set` to register."),
    }
    Ok(())
}

/// Merge the update into the stored profile and save it
pub async fn set(ctx: &Context, update: ProfileUpdate) -> Result<()> {
    AppLogger::log_command("profile set", "merge");
    let mut profile = ctx.profiles.load().await?.unwrap_or_default();

    if let Some(name) = update.name {
        profile.name = name;
    }
    if let Some(age) = update.age {
        profile.age = age;
    }
    if let Some(gender) = update.gender {
        profile.gender = Gender::from_str_lossy(&gender);
    }
    if let Some(height) = update.height {
        profile.height = height;
    }
    if let Some(weight) = update.weight {
        profile.weight = weight;
    }
    if let Some(activity) = update.activity {
        profile.activity_profile = ActivityProfile::from_str_lossy(&activity);
    }

    if update.no_comorbidities {
        profile.has_comorbidities = false;
        profile.comorbidities.clear();
        profile.other_comorbidity.clear();
    } else {
        if !update.comorbidities.is_empty() {
            profile.comorbidities = update
                .comorbidities
                .iter()
                .map(|label| Comorbidity::from_label(label))
                .collect();
            profile.has_comorbidities = true;
        }
        if let Some(other) = update.other {
            profile.other_comorbidity = other;
            profile.has_comorbidities = true;
        }
    }

    ctx.profiles.save(&profile).await?;
    info!("Profile saved");
    println!("\nSuccess Profile saved!");
    display_profile(&profile);
    Ok(())
}

/// Delete the stored profile
pub async fn clear(ctx: &Context) -> Result<()> {
    AppLogger::log_command("profile clear", "-");
    ctx.profiles.clear().await?;
    println!("Profile removed.");
    Ok(())
}
