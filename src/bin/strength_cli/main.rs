// ABOUTME: Strength CLI - command-line front end for the strength analytics engine
// ABOUTME: Loads a JSON workout snapshot, runs one analysis, and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Log a session (creates the snapshot if needed)
//! strength-cli log --user "John Doe" --exercise "Bench Press" --sets 3 --reps 8 --weight 100 --rpe 7
//!
//! # Suggest the next training weight
//! strength-cli predict --user "John Doe" --exercise "Bench Press"
//!
//! # Fatigue and deload guidance at a fixed reference date
//! strength-cli --as-of 2025-09-01 fatigue --user "John Doe"
//! strength-cli --as-of 2025-09-01 deload --user "John Doe"
//!
//! # Lifetime totals and personal records
//! strength-cli stats --user "John Doe"
//!
//! # Everything at once
//! strength-cli report --user "John Doe"
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use pierre_strength::analytics::StrengthAnalytics;
use pierre_strength::config::environment::{parse_date, AppConfig};
use pierre_strength::logging::LoggingConfig;
use pierre_strength::storage::load_json_file;
use tracing::debug;

use commands::analyze::{self, ExerciseArgs, UserArgs};
use commands::log::LogArgs;

#[derive(Parser)]
#[command(
    name = "strength-cli",
    about = "Pierre strength-training analytics",
    long_about = "Predict training weights, track strength trends, and monitor fatigue from a JSON workout log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Workout snapshot path (overrides STRENGTH_HISTORY_FILE)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Reference date as YYYY-MM-DD (overrides STRENGTH_AS_OF, defaults to today)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    as_of: Option<NaiveDate>,

    /// Enable debug logging (repeat for trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Suggest the next training weight for an exercise
    Predict {
        #[command(flatten)]
        target: ExerciseArgs,

        /// Fit on days only, ignoring RPE
        #[arg(long)]
        no_rpe: bool,
    },

    /// Predict the next weight for every logged exercise
    PredictAll {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Summarize the weight and RPE trend for an exercise
    Trends {
        #[command(flatten)]
        target: ExerciseArgs,

        /// Window length in days (default: 90)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Assess plateau risk for an exercise
    Plateau {
        #[command(flatten)]
        target: ExerciseArgs,
    },

    /// Estimate a one-rep max from a set
    OneRepMax {
        #[command(flatten)]
        target: ExerciseArgs,

        /// Reps performed
        #[arg(long)]
        reps: u32,

        /// Weight lifted
        #[arg(long)]
        weight: f64,

        /// RPE of the set (1-10)
        #[arg(long)]
        rpe: u8,
    },

    /// Generate a multi-week progression plan
    Plan {
        #[command(flatten)]
        target: ExerciseArgs,

        /// Number of weeks
        #[arg(long, default_value = "4")]
        weeks: u32,
    },

    /// Training load metrics and advisories
    Load {
        #[command(flatten)]
        user: UserArgs,

        /// Window length in days (default: 14)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Fatigue score, status, and component breakdown
    Fatigue {
        #[command(flatten)]
        user: UserArgs,

        /// Window length in days (default: 7)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Decide whether a deload week is warranted
    Deload {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Training readiness score
    Readiness {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Recovery recommendations for the current fatigue level
    Recovery {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Weekly fatigue history, most recent week first
    FatigueHistory {
        #[command(flatten)]
        user: UserArgs,

        /// Days of history to cover
        #[arg(long, default_value = "30")]
        days: u32,
    },

    /// Lifetime totals and personal records
    Stats {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Combined athlete report
    Report {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Append a workout to the snapshot
    Log(LogArgs),
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| format!("{e:#}"))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::from_env().with_verbosity(cli.verbose).init()?;

    let config = AppConfig::from_env()?;
    let history_path = cli.history.unwrap_or_else(|| config.history_file.clone());
    let as_of = cli.as_of.unwrap_or_else(|| config.reference_date());
    debug!(history = %history_path.display(), %as_of, "Resolved CLI settings");

    let store = load_json_file(&history_path)?;

    let analytics = StrengthAnalytics::new(store.shared());
    let succeeded = match cli.command {
        Command::Predict { target, no_rpe } => analyze::predict(&analytics, &target, !no_rpe)?,
        Command::PredictAll { user } => analyze::predict_all(&analytics, &user)?,
        Command::Trends { target, days } => analyze::trends(&analytics, &target, days, as_of)?,
        Command::Plateau { target } => analyze::plateau(&analytics, &target, as_of)?,
        Command::OneRepMax {
            target,
            reps,
            weight,
            rpe,
        } => analyze::one_rep_max(&analytics, &target, reps, weight, rpe)?,
        Command::Plan { target, weeks } => analyze::plan(&analytics, &target, weeks, as_of)?,
        Command::Load { user, days } => analyze::load(&analytics, &user, days, as_of)?,
        Command::Fatigue { user, days } => analyze::fatigue(&analytics, &user, days, as_of)?,
        Command::Deload { user } => analyze::deload(&analytics, &user, as_of)?,
        Command::Readiness { user } => analyze::readiness(&analytics, &user, as_of)?,
        Command::Recovery { user } => analyze::recovery(&analytics, &user, as_of)?,
        Command::FatigueHistory { user, days } => {
            analyze::fatigue_history(&analytics, &user, days, as_of)?
        }
        Command::Stats { user } => analyze::stats(&analytics, &user)?,
        Command::Report { user } => analyze::report(&analytics, &user, as_of)?,
        Command::Log(args) => {
            commands::log::append(&store, &history_path, args, as_of)?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
