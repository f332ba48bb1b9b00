// ABOUTME: Progress aggregation engine for the Pierre coaching platform
// ABOUTME: Derives comparison rows, latest values, weekly volume and exercise series from a roster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Read-only projections over a [`pierre_core::models::Roster`]. Nothing in
//! this crate mutates a roster; every function borrows its input and returns
//! freshly built view models.

/// View-model builders for charts and client comparisons
pub mod aggregation;

pub use aggregation::{
    comparison_rows, current_weight, exercise_ids, exercise_series, goal_gap, latest_metric,
    personal_best, roster_weekly_training_hours, short_name, weekly_training_hours,
    ComparisonRow, ExercisePoint, PersonalBest, WeeklyBucket,
};
