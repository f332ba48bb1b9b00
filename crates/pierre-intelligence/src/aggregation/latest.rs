// ABOUTME: Latest-value policy for client progress metrics
// ABOUTME: Last snapshot wins; empty history or missing metric yields the default value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::constants::progress::DEFAULT_METRIC_VALUE;
use pierre_core::models::{Client, ProgressMetric, ProgressSnapshot};

/// Current value of `metric`: the last snapshot's reading, or the default
#[must_use]
pub fn latest_metric(progress: &[ProgressSnapshot], metric: ProgressMetric) -> f64 {
    progress
        .last()
        .and_then(|snapshot| snapshot.metric(metric))
        .unwrap_or(DEFAULT_METRIC_VALUE)
}

/// Current body weight of a client
#[must_use]
pub fn current_weight(client: &Client) -> f64 {
    latest_metric(&client.progress, ProgressMetric::Weight)
}

/// Distance from the current weight to the goal (`goal - current`)
#[must_use]
pub fn goal_gap(client: &Client) -> f64 {
    client.goal - current_weight(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn snapshot(day: u32, weight: f64, body_fat: Option<f64>) -> ProgressSnapshot {
        ProgressSnapshot {
            date: Utc.with_ymd_and_hms(2026, 3, day, 8, 0, 0).unwrap(),
            weight,
            body_fat,
        }
    }

    #[test]
    fn test_last_snapshot_is_current() {
        let progress = vec![snapshot(1, 80.0, None), snapshot(2, 78.0, None)];
        assert!((latest_metric(&progress, ProgressMetric::Weight) - 78.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_progress_defaults_to_zero() {
        assert!(latest_metric(&[], ProgressMetric::Weight).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_metric_on_last_snapshot_defaults() {
        let progress = vec![snapshot(1, 80.0, Some(21.0)), snapshot(2, 79.0, None)];
        assert!(latest_metric(&progress, ProgressMetric::BodyFat).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_gap() {
        let client = Client::new("c", "Carla", 70.0)
            .with_progress(vec![snapshot(1, 74.5, None)]);
        assert!((goal_gap(&client) + 4.5).abs() < f64::EPSILON);
    }
}
