// ABOUTME: Body measurement snapshots recorded independently of any exercise
// ABOUTME: ProgressSnapshot and the ProgressMetric selector used by aggregations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dated body measurement for a client
///
/// A client's snapshots are kept in recording order; the last one is the
/// current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// When the measurement was taken
    pub date: DateTime<Utc>,
    /// Body weight
    pub weight: f64,
    /// Body fat percentage, when measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
}

impl ProgressSnapshot {
    /// Snapshot with only a weight reading
    #[must_use]
    pub const fn weight(date: DateTime<Utc>, weight: f64) -> Self {
        Self {
            date,
            weight,
            body_fat: None,
        }
    }

    /// Read the value of one tracked metric
    #[must_use]
    pub const fn metric(&self, metric: ProgressMetric) -> Option<f64> {
        match metric {
            ProgressMetric::Weight => Some(self.weight),
            ProgressMetric::BodyFat => self.body_fat,
        }
    }
}

/// Metrics carried by a [`ProgressSnapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMetric {
    /// Body weight
    Weight,
    /// Body fat percentage
    BodyFat,
}
