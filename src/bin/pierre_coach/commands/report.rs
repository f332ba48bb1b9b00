// ABOUTME: Roster report commands for pierre-coach
// ABOUTME: Prints comparison rows, weekly training hours, and exercise series as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_coaching::{
    aggregation::{
        comparison_rows, exercise_series, roster_weekly_training_hours, weekly_training_hours,
    },
    errors::{AppError, AppResult},
    models::{Client, ClientId, ExerciseId, Roster},
};
use std::sync::Arc;

use crate::helpers::display::print_json;

/// Print one comparison row per client
pub fn compare(roster: &Roster) -> AppResult<()> {
    print_json(&comparison_rows(roster))
}

/// Print weekly training hours for one client, or for the whole roster
pub fn weekly_hours(roster: &Roster, client: Option<&str>) -> AppResult<()> {
    let buckets = match client {
        Some(id) => weekly_training_hours(&find_client(roster, id)?.sessions),
        None => roster_weekly_training_hours(roster),
    };
    print_json(&buckets)
}

/// Print one exercise's records in stored order
pub fn series(roster: &Roster, client: &str, exercise: &str) -> AppResult<()> {
    let client = find_client(roster, client)?;
    print_json(&exercise_series(client, &ExerciseId::from(exercise)))
}

fn find_client<'a>(roster: &'a Roster, id: &str) -> AppResult<&'a Client> {
    let client_id = ClientId::from(id);
    roster
        .get(&client_id)
        .map(Arc::as_ref)
        .ok_or_else(|| AppError::not_found(format!("Client {id}")).with_resource_id(id))
}
