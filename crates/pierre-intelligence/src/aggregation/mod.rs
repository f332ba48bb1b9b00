// ABOUTME: Aggregation view-model builders over a coaching roster
// ABOUTME: Groups latest-value, comparison, weekly volume and exercise progress projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation
//!
//! The "latest value" of a progress metric is the value in the last snapshot
//! of a client's `progress` sequence. That sequence is kept chronological by
//! the single insertion point in the history mutator, so nothing here sorts
//! or re-orders snapshots.

mod comparison;
mod exercise_progress;
mod latest;
mod weekly_volume;

pub use comparison::{comparison_rows, short_name, ComparisonRow};
pub use exercise_progress::{
    exercise_ids, exercise_series, personal_best, ExercisePoint, PersonalBest,
};
pub use latest::{current_weight, goal_gap, latest_metric};
pub use weekly_volume::{roster_weekly_training_hours, weekly_training_hours, WeeklyBucket};
