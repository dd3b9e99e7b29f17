// ABOUTME: Workout logging command for strength-cli
// ABOUTME: Validates a new session, appends it to the store, and rewrites the snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::NaiveDate;
use clap::Args;
use pierre_strength::config::environment::parse_date;
use pierre_strength::storage::{write_json_file, InMemoryHistory};
use serde_json::json;
use strength_core::errors::{AppError, AppResult};
use strength_core::models::WorkoutEntryBuilder;
use tracing::info;

use crate::helpers::output::print_json;

/// Fields of the session to record
#[derive(Args)]
pub struct LogArgs {
    /// User name
    #[arg(long)]
    pub user: String,

    /// Exercise name
    #[arg(long)]
    pub exercise: String,

    /// Number of sets (1-20)
    #[arg(long)]
    pub sets: u32,

    /// Reps per set (1-50)
    #[arg(long)]
    pub reps: u32,

    /// Weight per rep (0-1000)
    #[arg(long)]
    pub weight: f64,

    /// RPE (1-10)
    #[arg(long)]
    pub rpe: u8,

    /// Session date as YYYY-MM-DD (defaults to the reference date)
    #[arg(long)]
    pub date: Option<String>,
}

/// Validate and append a session, then persist the snapshot
pub fn append(
    store: &InMemoryHistory,
    path: &Path,
    args: LogArgs,
    as_of: NaiveDate,
) -> AppResult<()> {
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw).map_err(|e| AppError::invalid_input(format!("{e:#}")))?,
        None => as_of,
    };

    let entry = WorkoutEntryBuilder::new(args.user, args.exercise, date)
        .sets(args.sets)
        .reps(args.reps)
        .weight(args.weight)
        .rpe(args.rpe)
        .build()?;
    let tonnage = entry.tonnage();
    let (user, exercise) = (entry.user().to_owned(), entry.exercise().to_owned());

    store.add_workout(entry)?;
    write_json_file(path, store)?;
    info!(user = %user, exercise = %exercise, %date, "Logged workout");

    print_json(&json!({
        "status": "ok",
        "result": {
            "user": user,
            "exercise": exercise,
            "date": date,
            "tonnage": tonnage,
            "total_workouts": store.len(),
        }
    }))
}
