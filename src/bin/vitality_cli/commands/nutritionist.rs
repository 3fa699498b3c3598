// ABOUTME: Nutritionist directory commands for vitality-cli
// ABOUTME: Add, list, recommend, and attach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use std::path::Path;
use uuid::Uuid;
use vitality::errors::AppResult;
use vitality::logging::AppLogger;
use vitality::models::Attachment;

type Result<T> = AppResult<T>;

use super::Context;
use crate::helpers::display::display_nutritionist;

/// Add a nutritionist
pub async fn add(ctx: &Context, name: &str, email: &str, phone: &str) -> Result<()> {
    AppLogger::log_command("nutritionist add", name);
    let record = ctx.nutritionists.add(name, email, phone).await?;
    println!("\nSuccess Nutritionist added!");
    display_nutritionist(&record);
    Ok(())
}

/// List every nutritionist
pub async fn list(ctx: &Context) -> Result<()> {
    let records = ctx.nutritionists.list().await?;
    if records.is_empty() {
        println!("Nenhum nutricionista cadastrado.");
        return Ok(());
    }
    for record in &records {
        display_nutritionist(record);
    }
    Ok(())
}

/// Add a recommendation
pub async fn recommend(ctx: &Context, id: Uuid, text: &str) -> Result<()> {
    AppLogger::log_command("nutritionist recommend", id);
    let record = ctx.nutritionists.add_recommendation(id, text).await?;
    display_nutritionist(&record);
    Ok(())
}

/// Attach a file reference
pub async fn attach(
    ctx: &Context,
    id: Uuid,
    uri: String,
    name: Option<String>,
    mime_type: String,
) -> Result<()> {
    AppLogger::log_command("nutritionist attach", id);
    let name = name.unwrap_or_else(|| {
        Path::new(&uri)
            .file_name()
            .map_or_else(|| uri.clone(), |file| file.to_string_lossy().into_owned())
    });
    let record = ctx
        .nutritionists
        .attach(
            id,
            Attachment {
                uri,
                name,
                mime_type,
            },
        )
        .await?;
    display_nutritionist(&record);
    Ok(())
}
