// ABOUTME: JSON snapshot persistence for the in-memory workout store
// ABOUTME: Reads and writes a {"workouts": [...]} document, validating every entry on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strength_core::errors::{AppError, AppResult};
use strength_core::models::WorkoutEntry;
use tracing::{debug, info};

use super::memory::InMemoryHistory;

/// On-disk document layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSnapshot {
    /// Every logged session
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
}

/// Load a snapshot into a fresh store
///
/// A missing file yields an empty store so the first `log` can create it.
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, `SerializationError` if
/// it is not a valid snapshot, or a validation error for out-of-range entries
pub fn load_json_file(path: &Path) -> AppResult<InMemoryHistory> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No history snapshot found, starting empty");
            return Ok(InMemoryHistory::new());
        }
        Err(e) => {
            return Err(AppError::storage(format!(
                "Failed to read history file {}: {e}",
                path.display()
            ))
            .with_source(e))
        }
    };

    let snapshot: WorkoutSnapshot = serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!(
            "Invalid history file {}: {e}",
            path.display()
        ))
        .with_source(e)
    })?;
    let count = snapshot.workouts.len();
    let store = InMemoryHistory::from_entries(snapshot.workouts)?;
    info!(path = %path.display(), workouts = count, "Loaded workout history");
    Ok(store)
}

/// Write every stored session to `path`, creating parent directories
///
/// # Errors
///
/// Returns `StorageError` if the directory or file cannot be written
pub fn write_json_file(path: &Path, store: &InMemoryHistory) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let snapshot = WorkoutSnapshot {
        workouts: store.all_workouts(),
    };
    let body = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, body).map_err(|e| {
        AppError::storage(format!(
            "Failed to write history file {}: {e}",
            path.display()
        ))
        .with_source(e)
    })?;
    info!(path = %path.display(), workouts = snapshot.workouts.len(), "Saved workout history");
    Ok(())
}
