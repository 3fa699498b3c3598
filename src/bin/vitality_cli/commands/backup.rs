// ABOUTME: Backup commands for vitality-cli
// ABOUTME: JSON snapshot export and import, CSV weight export, and full reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use std::path::Path;
use tokio::fs;
use tracing::warn;
use vitality::backup::{
    export_snapshot, export_weigh_ins_csv, import_snapshot, read_snapshot, reset as reset_store,
    write_snapshot,
};
use vitality::errors::{AppError, AppResult};
use vitality::logging::AppLogger;

type Result<T> = AppResult<T>;

use super::Context;

/// Write a snapshot file
pub async fn export(ctx: &Context, path: &Path) -> Result<()> {
    AppLogger::log_command("backup export", path.display());
    let snapshot = export_snapshot(&ctx.store).await?;
    write_snapshot(&snapshot, path).await?;
    println!(
        "Success Backup written to {} ({} weigh-ins, {} nutritionists)",
        path.display(),
        snapshot.weigh_ins.len(),
        snapshot.nutritionists.len()
    );
    Ok(())
}

/// Restore a snapshot file
pub async fn import(ctx: &Context, path: &Path) -> Result<()> {
    AppLogger::log_command("backup import", path.display());
    let snapshot = read_snapshot(path).await?;
    import_snapshot(&ctx.store, &snapshot).await?;
    println!(
        "Success Restored backup from {}",
        snapshot.exported_at.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

/// Export the weight history as CSV
pub async fn csv(ctx: &Context, path: Option<&Path>) -> Result<()> {
    let csv = export_weigh_ins_csv(&ctx.store).await?;
    match path {
        Some(path) => {
            fs::write(path, csv).await?;
            println!("Success CSV written to {}", path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}

/// Delete everything, only when confirmed
pub async fn reset(ctx: &Context, confirmed: bool) -> Result<()> {
    if !confirmed {
        warn!("Reset requested without --yes");
        return Err(AppError::invalid_input(
            "Reset deletes every record; pass --yes to confirm",
        ));
    }
    AppLogger::log_command("backup reset", "confirmed");
    reset_store(&ctx.store).await?;
    println!("Success All data removed.");
    Ok(())
}
