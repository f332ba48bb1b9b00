// ABOUTME: Exercise-scoped strength training records
// ABOUTME: WeightHistory (stored record) and WeightEntry (untagged batch import row)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExerciseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dated strength-training log entry for one exercise
///
/// Records are not unique by `(exercise_id, date)`: logging the same lift twice
/// at the same instant keeps both.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use pierre_core::models::{ExerciseId, WeightHistory};
///
/// let record = WeightHistory {
///     exercise_id: ExerciseId::new("bench"),
///     date: Utc::now(),
///     weight: 80.0,
///     reps: 5,
///     notes: Some("paused reps".into()),
/// };
/// assert_eq!(record.exercise_id.as_str(), "bench");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightHistory {
    /// Exercise this record belongs to
    pub exercise_id: ExerciseId,
    /// When the set was recorded (ISO-8601 on the wire)
    pub date: DateTime<Utc>,
    /// Load lifted; not range checked
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WeightHistory {
    /// Whether this record belongs to the given exercise
    #[must_use]
    pub fn is_for(&self, exercise_id: &ExerciseId) -> bool {
        self.exercise_id == *exercise_id
    }
}

/// A weight record without its exercise, as supplied to a batch import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// When the set was recorded
    pub date: DateTime<Utc>,
    /// Load lifted
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WeightEntry {
    /// Tag this entry with an exercise, producing a stored record
    #[must_use]
    pub fn into_record(self, exercise_id: ExerciseId) -> WeightHistory {
        WeightHistory {
            exercise_id,
            date: self.date,
            weight: self.weight,
            reps: self.reps,
            notes: self.notes,
        }
    }
}
