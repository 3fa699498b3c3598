// ABOUTME: Vitality CLI - command-line front end for the health tracker
// ABOUTME: Manages the profile, weigh-ins, nutritionists, and backups, and prints plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker
//!
//! Usage:
//! ```bash
//! # Register or update the profile
//! vitality-cli profile set --name "Ana Souza" --age 34 --gender feminino \
//!     --height 1,65 --weight 70 --activity fitness --comorbidity Diabetes
//!
//! # Show BMI, ideal weight, classification, and selected tiers
//! vitality-cli metrics
//!
//! # Monday's menu (0 = Monday) and the full exercise week
//! vitality-cli diet --day 0
//! vitality-cli exercise
//!
//! # Record a weigh-in and review the history
//! vitality-cli weigh-in add 69,4
//! vitality-cli weigh-in list
//!
//! # Back up everything to a JSON file
//! vitality-cli backup export ./vitality-backup.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;
use vitality::config::AppConfig;
use vitality::errors::{AppError, AppResult};
use vitality::storage::{open_store, StorageConfig};

type Result<T> = AppResult<T>;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "vitality-cli",
    about = "Vitality health tracker CLI",
    long_about = "Body metrics, diet and exercise plans, recipes, and weight history for a single user profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to VITALITY_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile management commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Show BMI, ideal weight, weight classification, and selected tiers
    Metrics,

    /// Show the dashboard summary
    Dashboard,

    /// Show the weekly menu, or a single day
    Diet {
        /// Day of the week, 0 = Monday through 6 = Sunday
        #[arg(long)]
        day: Option<usize>,
    },

    /// Show the weekly exercise plan, or a single day
    Exercise {
        /// Day of the week, 0 = Monday through 6 = Sunday
        #[arg(long)]
        day: Option<usize>,
    },

    /// List recipes recommended for the profile
    Recipes,

    /// Show a recipe in full
    Recipe {
        /// Recipe identifier
        id: String,
    },

    /// Weigh-in commands
    WeighIn {
        #[command(subcommand)]
        action: WeighInCommand,
    },

    /// Nutritionist directory commands
    Nutritionist {
        #[command(subcommand)]
        action: NutritionistCommand,
    },

    /// Backup, export, and reset commands
    Backup {
        #[command(subcommand)]
        action: BackupCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the stored profile
    Show,

    /// Create or update the profile; omitted fields keep their stored value
    Set {
        /// Full name
        #[arg(long)]
        name: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<u32>,

        /// Gender (masculino, feminino, outro)
        #[arg(long)]
        gender: Option<String>,

        /// Height in meters, comma or dot decimal
        #[arg(long)]
        height: Option<String>,

        /// Weight in kilograms, comma or dot decimal
        #[arg(long)]
        weight: Option<String>,

        /// Activity profile (sedentario, ativo, fitness, atleta_amador, atleta_alto_rendimento)
        #[arg(long)]
        activity: Option<String>,

        /// Comorbidity; repeat for several
        #[arg(long = "comorbidity")]
        comorbidities: Vec<String>,

        /// Free-text description of another condition
        #[arg(long)]
        other: Option<String>,

        /// Clear every comorbidity
        #[arg(long, conflicts_with_all = ["comorbidities", "other"])]
        no_comorbidities: bool,
    },

    /// Delete the stored profile
    Clear,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeighInCommand {
    /// Record a weight now; also updates the profile weight
    Add {
        /// Weight in kilograms
        weight: String,
    },

    /// List the weight history with BMI
    List,

    /// Change the weight of an entry
    Edit {
        /// Entry number as shown by `weigh-in list`
        number: usize,

        /// New weight in kilograms
        weight: String,
    },

    /// Delete an entry
    Delete {
        /// Entry number as shown by `weigh-in list`
        number: usize,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum NutritionistCommand {
    /// Add a nutritionist
    Add {
        /// Name
        name: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// List nutritionists with their recommendations
    List,

    /// Add a recommendation from a nutritionist
    Recommend {
        /// Nutritionist id
        id: Uuid,

        /// Recommendation text
        text: String,
    },

    /// Attach a file reference to a nutritionist
    Attach {
        /// Nutritionist id
        id: Uuid,

        /// File location
        uri: String,

        /// Display name (defaults to the last path segment)
        #[arg(long)]
        name: Option<String>,

        /// MIME type
        #[arg(long, default_value = "application/octet-stream")]
        mime_type: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum BackupCommand {
    /// Write every record to a JSON snapshot
    Export {
        /// Output file
        path: PathBuf,
    },

    /// Replace every record with a JSON snapshot
    Import {
        /// Snapshot file
        path: PathBuf,
    },

    /// Export the weight history as CSV
    Csv {
        /// Output file (prints to stdout when omitted)
        path: Option<PathBuf>,
    },

    /// Delete every stored record
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env().with_data_dir(cli.data_dir);
    config
        .logging
        .clone()
        .verbose(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    debug!(data_dir = %config.data_dir().display(), "Vitality CLI");

    let store = open_store(&StorageConfig::File(config.data_dir().to_path_buf())).await?;
    let ctx = Context::new(store);

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&ctx).await?,
            ProfileCommand::Set {
                name,
                age,
                gender,
                height,
                weight,
                activity,
                comorbidities,
                other,
                no_comorbidities,
            } => {
                let update = commands::profile::ProfileUpdate {
                    name,
                    age,
                    gender,
                    height,
                    weight,
                    activity,
                    comorbidities,
                    other,
                    no_comorbidities,
                };
                commands::profile::set(&ctx, update).await?;
            }
            ProfileCommand::Clear => commands::profile::clear(&ctx).await?,
        },
        Command::Metrics => commands::plans::metrics(&ctx).await?,
        Command::Dashboard => commands::plans::dashboard(&ctx).await?,
        Command::Diet { day } => commands::plans::diet(&ctx, day).await?,
        Command::Exercise { day } => commands::plans::exercise(&ctx, day).await?,
        Command::Recipes => commands::plans::recipes(&ctx).await?,
        Command::Recipe { id } => commands::plans::recipe(&id)?,
        Command::WeighIn { action } => match action {
            WeighInCommand::Add { weight } => commands::weigh_in::add(&ctx, &weight).await?,
            WeighInCommand::List => commands::weigh_in::list(&ctx).await?,
            WeighInCommand::Edit { number, weight } => {
                commands::weigh_in::edit(&ctx, number, &weight).await?;
            }
            WeighInCommand::Delete { number } => commands::weigh_in::delete(&ctx, number).await?,
        },
        Command::Nutritionist { action } => match action {
            NutritionistCommand::Add { name, email, phone } => {
                commands::nutritionist::add(&ctx, &name, &email, &phone).await?;
            }
            NutritionistCommand::List => commands::nutritionist::list(&ctx).await?,
            NutritionistCommand::Recommend { id, text } => {
                commands::nutritionist::recommend(&ctx, id, &text).await?;
            }
            NutritionistCommand::Attach {
                id,
                uri,
                name,
                mime_type,
            } => {
                commands::nutritionist::attach(&ctx, id, uri, name, mime_type).await?;
            }
        },
        Command::Backup { action } => match action {
            BackupCommand::Export { path } => commands::backup::export(&ctx, &path).await?,
            BackupCommand::Import { path } => commands::backup::import(&ctx, &path).await?,
            BackupCommand::Csv { path } => commands::backup::csv(&ctx, path.as_deref()).await?,
            BackupCommand::Reset { yes } => commands::backup::reset(&ctx, yes).await?,
        },
    }

    Ok(())
}
