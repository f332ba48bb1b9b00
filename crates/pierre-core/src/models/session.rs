// ABOUTME: Logged training sessions used for time-bucketed training volume
// ABOUTME: TrainingSession definition with duration helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExerciseId;
use crate::constants::time_constants::MINUTES_PER_HOUR_F64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Session start time
    pub started_at: DateTime<Utc>,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Exercises performed, if recorded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercise_ids: Vec<ExerciseId>,
}

impl TrainingSession {
    /// Session without exercise details
    #[must_use]
    pub const fn new(started_at: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            started_at,
            duration_minutes,
            exercise_ids: Vec::new(),
        }
    }

    /// Duration expressed in hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes) / MINUTES_PER_HOUR_F64
    }
}
