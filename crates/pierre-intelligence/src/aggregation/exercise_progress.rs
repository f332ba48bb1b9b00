// ABOUTME: Per-exercise strength progress projections for client detail charts
// ABOUTME: Exercise series in stored order, distinct exercise ids, and personal bests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use pierre_core::models::{Client, ExerciseId, WeightHistory};
use serde::{Deserialize, Serialize};

/// One plotted point of an exercise chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePoint {
    /// When the set was recorded
    pub date: DateTime<Utc>,
    /// Load lifted
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
}

impl From<&WeightHistory> for ExercisePoint {
    fn from(record: &WeightHistory) -> Self {
        Self {
            date: record.date,
            weight: record.weight,
            reps: record.reps,
        }
    }
}

/// Heaviest recorded set for an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalBest {
    /// Exercise the record belongs to
    pub exercise_id: ExerciseId,
    /// Load lifted
    pub weight: f64,
    /// Repetitions at that load
    pub reps: u32,
    /// When it was lifted
    pub date: DateTime<Utc>,
}

/// Records for one exercise, in stored order
#[must_use]
pub fn exercise_series(client: &Client, exercise_id: &ExerciseId) -> Vec<ExercisePoint> {
    client
        .weight_history
        .iter()
        .filter(|record| record.is_for(exercise_id))
        .map(ExercisePoint::from)
        .collect()
}

/// Distinct exercises in the order they first appear in the history
#[must_use]
pub fn exercise_ids(client: &Client) -> Vec<ExerciseId> {
    let mut ids: Vec<ExerciseId> = Vec::new();
    for record in &client.weight_history {
        if !ids.contains(&record.exercise_id) {
            ids.push(record.exercise_id.clone());
        }
    }
    ids
}

/// Heaviest finite load for an exercise; the earliest stored record wins ties
#[must_use]
pub fn personal_best(client: &Client, exercise_id: &ExerciseId) -> Option<PersonalBest> {
    let mut best: Option<&WeightHistory> = None;
    for record in client
        .weight_history
        .iter()
        .filter(|record| record.is_for(exercise_id) && record.weight.is_finite())
    {
        if best.is_none_or(|current| record.weight > current.weight) {
            best = Some(record);
        }
    }

    best.map(|record| PersonalBest {
        exercise_id: record.exercise_id.clone(),
        weight: record.weight,
        reps: record.reps,
        date: record.date,
    })
}
