// ABOUTME: Pierre coach CLI - apply progress updates and print roster projections
// ABOUTME: Reads a roster JSON document, runs one operation, and writes JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Log a set for a client (prints the updated roster)
//! pierre-coach log-weight --roster roster.json --client c-1 --exercise bench --weight 80 --reps 5
//!
//! # Replace all squat records with an imported batch
//! pierre-coach import --roster roster.json --client c-1 --exercise squat --entries squat.json
//!
//! # Record a body-weight snapshot
//! pierre-coach progress --roster roster.json --client c-1 --weight 78.4
//!
//! # Compare every client's current weight with their goal
//! pierre-coach compare --roster roster.json
//!
//! # Weekly training hours for one client or the whole roster
//! pierre-coach weekly-hours --roster roster.json --client c-1
//!
//! # Chart series for one exercise
//! pierre-coach series --roster roster.json --client c-1 --exercise bench
//! ```

mod commands;
mod helpers;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use pierre_coaching::{
    config::ProgressConfig,
    errors::{AppError, AppResult},
    logging::{LogTarget, LoggingConfig},
    models::Roster,
    roster_file,
    services::ProgressService,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "pierre-coach",
    about = "Pierre coaching progress CLI",
    long_about = "Applies weight-history and progress updates to a roster document and prints roster projections as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Roster document (defaults to PIERRE_ROSTER_PATH)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Log one set for a client
    LogWeight {
        /// Client id
        #[arg(long)]
        client: String,

        /// Exercise id
        #[arg(long)]
        exercise: String,

        /// Load lifted
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Repetitions performed
        #[arg(long)]
        reps: u32,

        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Replace every record of one exercise with a batch from a JSON file
    Import {
        /// Client id
        #[arg(long)]
        client: String,

        /// Exercise id
        #[arg(long)]
        exercise: String,

        /// JSON array of {date, weight, reps, notes?}
        #[arg(long)]
        entries: PathBuf,
    },

    /// Record a body measurement snapshot
    Progress {
        /// Client id
        #[arg(long)]
        client: String,

        /// Body weight
        #[arg(long)]
        weight: f64,

        /// Body fat percentage
        #[arg(long)]
        body_fat: Option<f64>,

        /// Measurement time (RFC 3339, defaults to now)
        #[arg(long)]
        date: Option<DateTime<Utc>>,
    },

    /// One comparison row per client
    Compare,

    /// Training hours per ISO week
    WeeklyHours {
        /// Restrict to one client
        #[arg(long)]
        client: Option<String>,
    },

    /// Records for one exercise, in stored order
    Series {
        /// Client id
        #[arg(long)]
        client: String,

        /// Exercise id
        #[arg(long)]
        exercise: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.target = LogTarget::Stderr;
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    if let Err(init_error) = logging.init() {
        eprintln!("logging disabled: {init_error}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(app_error) => {
            error!(code = ?app_error.code, "{app_error}");
            eprintln!("{app_error}");
            ExitCode::from(app_error.code.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = ProgressConfig::try_from_env()?;
    debug!(policy = %config.unknown_client_policy, "Loaded progress configuration");

    let roster_path = cli
        .roster
        .or_else(|| config.roster_path.clone())
        .ok_or_else(|| {
            AppError::invalid_input("no roster document: pass --roster or set PIERRE_ROSTER_PATH")
        })?;
    let roster: Roster = roster_file::load_roster(&roster_path)?;
    let service = ProgressService::new(config);

    match cli.command {
        Command::LogWeight {
            client,
            exercise,
            weight,
            reps,
            notes,
        } => commands::roster::log_weight(&service, &roster, client, exercise, weight, reps, notes),
        Command::Import {
            client,
            exercise,
            entries,
        } => commands::roster::import(&service, &roster, &client, &exercise, &entries),
        Command::Progress {
            client,
            weight,
            body_fat,
            date,
        } => commands::roster::progress(&service, &roster, &client, weight, body_fat, date),
        Command::Compare => commands::report::compare(&roster),
        Command::WeeklyHours { client } => {
            commands::report::weekly_hours(&roster, client.as_deref())
        }
        Command::Series { client, exercise } => {
            commands::report::series(&roster, &client, &exercise)
        }
    }
}
