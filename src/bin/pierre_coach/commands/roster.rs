// ABOUTME: Roster mutation commands for pierre-coach
// ABOUTME: Handles log-weight, import, and progress operations through the progress service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use pierre_coaching::{
    errors::AppResult,
    history::AppendWeightRecord,
    models::{ClientId, ExerciseId, ProgressSnapshot, Roster},
    roster_file,
    services::ProgressService,
};
use std::path::Path;
use tracing::info;

use crate::helpers::display::print_update;

/// Log one set and print the next roster
pub fn log_weight(
    service: &ProgressService,
    roster: &Roster,
    client: String,
    exercise: String,
    weight: f64,
    reps: u32,
    notes: Option<String>,
) -> AppResult<()> {
    let mut request = AppendWeightRecord::new(client, exercise, weight, reps);
    request.notes = notes;

    let update = service.log_weight(roster, &request)?;
    print_update(&update)
}

/// Replace one exercise's records with a batch file and print the next roster
pub fn import(
    service: &ProgressService,
    roster: &Roster,
    client: &str,
    exercise: &str,
    entries_path: &Path,
) -> AppResult<()> {
    let entries = roster_file::load_entries(entries_path)?;
    info!(
        entries = entries.len(),
        path = %entries_path.display(),
        "Importing exercise records"
    );

    let update = service.import_exercise(
        roster,
        &ClientId::from(client),
        &ExerciseId::from(exercise),
        &entries,
    )?;
    print_update(&update)
}

/// Record a progress snapshot and print the next roster
pub fn progress(
    service: &ProgressService,
    roster: &Roster,
    client: &str,
    weight: f64,
    body_fat: Option<f64>,
    date: Option<DateTime<Utc>>,
) -> AppResult<()> {
    let snapshot = ProgressSnapshot {
        date: date.unwrap_or_else(Utc::now),
        weight,
        body_fat,
    };

    let update = service.record_progress(roster, &ClientId::from(client), snapshot)?;
    print_update(&update)
}
