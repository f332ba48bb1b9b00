// ABOUTME: Cross-client comparison projection used by the roster comparison chart
// ABOUTME: One row per client in roster order with short name, current weight and goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::latest::current_weight;
use pierre_core::models::{ClientId, Roster};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A client's row in the comparison view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Client the row belongs to
    pub client_id: ClientId,
    /// First token of the client's full name
    pub short_name: String,
    /// Latest recorded body weight, `0.0` without progress
    pub current_weight: f64,
    /// Client goal
    pub goal: f64,
}

/// First whitespace-separated token of a full name
///
/// Blank names produce an empty string.
#[must_use]
pub fn short_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("")
}

/// Build one comparison row per client, preserving roster order
///
/// Clients without progress are kept with a zero weight rather than dropped.
#[must_use]
pub fn comparison_rows(roster: &Roster) -> Vec<ComparisonRow> {
    let rows: Vec<ComparisonRow> = roster
        .iter()
        .map(|client| ComparisonRow {
            client_id: client.id().clone(),
            short_name: short_name(&client.name).to_owned(),
            current_weight: current_weight(client),
            goal: client.goal,
        })
        .collect();

    debug!(
        roster.version = roster.version(),
        rows = rows.len(),
        "Built comparison rows"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("Ana Paula Souza"), "Ana");
        assert_eq!(short_name("  Bruno  "), "Bruno");
        assert_eq!(short_name(""), "");
        assert_eq!(short_name("   "), "");
    }
}
