// ABOUTME: JSON document helpers used by the command-line front end
// ABOUTME: Reads roster and batch-entry documents and renders values as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The core never stores rosters. These helpers only let the CLI load a
//! snapshot handed to it and print the next one.

use crate::errors::{AppError, AppResult};
use crate::models::{Roster, WeightEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a roster document (`{"version": n, "clients": [...]}`)
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, `SerializationError` if
/// it is not valid JSON, or `ResourceAlreadyExists` for duplicate client ids
pub fn load_roster(path: &Path) -> AppResult<Roster> {
    let roster: Roster = read_json(path)?;
    debug!(
        path = %path.display(),
        clients = roster.len(),
        roster.version = roster.version(),
        "Loaded roster"
    );
    Ok(roster)
}

/// Read a JSON array of batch import entries
///
/// # Errors
///
/// Returns `StorageError` or `SerializationError` as for [`load_roster`]
pub fn load_entries(path: &Path) -> AppResult<Vec<WeightEntry>> {
    read_json(path)
}

/// Render any serializable value as pretty JSON
///
/// # Errors
///
/// Returns `SerializationError` if the value cannot be serialized
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|error| {
        AppError::storage(format!("cannot read {}: {error}", path.display())).with_source(error)
    })?;
    let value = serde_json::from_str(&raw).map_err(|error| {
        AppError::from(error).with_resource_id(path.display().to_string())
    })?;
    Ok(value)
}
