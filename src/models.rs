// ABOUTME: Roster data model re-exports for the coaching crate
// ABOUTME: Client, Roster, WeightHistory and related types are defined in pierre-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! See `pierre_core::models` for the definitions.

pub use pierre_core::models::{
    Client, ClientId, ExerciseId, ProgressMetric, ProgressSnapshot, Roster, TrainingSession,
    WeightEntry, WeightHistory,
};
