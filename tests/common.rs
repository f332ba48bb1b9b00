// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, fixed timestamps, and sample rosters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_coaching`

use chrono::{DateTime, TimeZone, Utc};
use pierre_coaching::models::{
    Client, ExerciseId, ProgressSnapshot, Roster, TrainingSession, WeightHistory,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 09:00 UTC on the given day of March 2026
pub fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap()
}

/// A stored weight record
pub fn record(exercise: &str, date: DateTime<Utc>, weight: f64, reps: u32) -> WeightHistory {
    WeightHistory {
        exercise_id: ExerciseId::new(exercise),
        date,
        weight,
        reps,
        notes: None,
    }
}

/// Three clients: Ana has progress and history, Bruno and Carla are empty
pub fn sample_roster() -> Roster {
    init_test_logging();
    Roster::new(vec![
        Client::new("ana", "Ana Paula Souza", 60.0)
            .with_progress(vec![
                ProgressSnapshot::weight(day(1), 80.0),
                ProgressSnapshot::weight(day(2), 78.0),
            ])
            .with_weight_history(vec![
                record("bench", day(1), 40.0, 10),
                record("squat", day(2), 70.0, 5),
            ])
            .with_sessions(vec![
                TrainingSession::new(day(2), 60),
                TrainingSession::new(day(4), 45),
            ]),
        Client::new("bruno", "Bruno Lima", 85.0),
        Client::new("carla", "Carla Dias", 70.0)
            .with_sessions(vec![TrainingSession::new(day(10), 90)]),
    ])
    .unwrap()
}
