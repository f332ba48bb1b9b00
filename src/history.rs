// ABOUTME: History mutator producing new roster snapshots from weight and progress updates
// ABOUTME: Pure (roster, request) -> RosterUpdate functions for append, batch replace, progress and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # History Mutator
//!
//! Every function here takes a roster snapshot by reference and returns a
//! [`RosterUpdate`] holding the next snapshot. The input snapshot is never
//! modified, and clients other than the target are carried over as the same
//! `Arc`.
//!
//! An unknown client id is reported as [`UpdateOutcome::ClientNotFound`] with
//! the roster returned unchanged; callers decide whether that is an error
//! (see `config::UnknownClientPolicy`).
//!
//! Nothing in this module emits notifications or reads the clock. The
//! progress service does both around these functions.

use crate::errors::{AppError, AppResult};
use crate::models::{
    ClientId, ExerciseId, ProgressSnapshot, Roster, TrainingSession, WeightEntry, WeightHistory,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an update did to the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// The target client was replaced and the version incremented
    Applied,
    /// No client matched; the roster is unchanged
    ClientNotFound {
        /// Id that failed to match
        client_id: ClientId,
    },
}

/// Next roster snapshot plus the outcome that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct RosterUpdate {
    /// Snapshot to publish
    pub roster: Roster,
    /// Whether the target client was found
    pub outcome: UpdateOutcome,
}

impl RosterUpdate {
    fn from_result(previous: &Roster, client_id: &ClientId, next: Option<Roster>) -> Self {
        next.map_or_else(
            || Self {
                roster: previous.clone(),
                outcome: UpdateOutcome::ClientNotFound {
                    client_id: client_id.clone(),
                },
            },
            |roster| Self {
                roster,
                outcome: UpdateOutcome::Applied,
            },
        )
    }

    /// Whether the update changed the roster
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self.outcome, UpdateOutcome::Applied)
    }
}

/// Request to log one set for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppendWeightRecord {
    /// Target client
    pub client_id: ClientId,
    /// Exercise the set belongs to
    pub exercise_id: ExerciseId,
    /// Load lifted; any value is accepted
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppendWeightRecord {
    /// Request without notes
    pub fn new(
        client_id: impl Into<ClientId>,
        exercise_id: impl Into<ExerciseId>,
        weight: f64,
        reps: u32,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            exercise_id: exercise_id.into(),
            weight,
            reps,
            notes: None,
        }
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    fn to_record(&self, recorded_at: DateTime<Utc>) -> WeightHistory {
        WeightHistory {
            exercise_id: self.exercise_id.clone(),
            date: recorded_at,
            weight: self.weight,
            reps: self.reps,
            notes: self.notes.clone(),
        }
    }
}

/// Append one record, stamped `recorded_at`, to the end of a client's history
///
/// Records with the same exercise and date are not deduplicated.
#[must_use]
pub fn append_weight_record(
    roster: &Roster,
    request: &AppendWeightRecord,
    recorded_at: DateTime<Utc>,
) -> RosterUpdate {
    let record = request.to_record(recorded_at);
    let next = roster.updated(&request.client_id, |client| {
        client.weight_history.push(record);
    });
    RosterUpdate::from_result(roster, &request.client_id, next)
}

/// Replace every record of one exercise with `entries`
///
/// Records of other exercises keep their relative order and come first; the
/// new records follow in input order. Replaying the same batch yields the
/// same history, and an empty batch clears the exercise.
#[must_use]
pub fn replace_exercise_records(
    roster: &Roster,
    client_id: &ClientId,
    exercise_id: &ExerciseId,
    entries: &[WeightEntry],
) -> RosterUpdate {
    let next = roster.updated(client_id, |client| {
        client
            .weight_history
            .retain(|record| !record.is_for(exercise_id));
        client.weight_history.extend(
            entries
                .iter()
                .map(|entry| entry.clone().into_record(exercise_id.clone())),
        );
    });
    RosterUpdate::from_result(roster, client_id, next)
}

/// Append a progress snapshot, keeping the sequence chronological
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `snapshot` is dated before the client's last
/// snapshot. Equal dates are accepted.
pub fn record_progress(
    roster: &Roster,
    client_id: &ClientId,
    snapshot: ProgressSnapshot,
) -> AppResult<RosterUpdate> {
    let next = roster.try_updated(client_id, |client| {
        if let Some(last) = client.progress.last() {
            if snapshot.date < last.date {
                return Err(AppError::out_of_range(format!(
                    "progress snapshot dated {} precedes latest snapshot {}",
                    snapshot.date.to_rfc3339(),
                    last.date.to_rfc3339()
                ))
                .with_resource_id(client_id.as_str()));
            }
        }
        client.progress.push(snapshot);
        Ok(())
    })?;
    Ok(RosterUpdate::from_result(roster, client_id, next))
}

/// Append a logged training session
#[must_use]
pub fn log_session(
    roster: &Roster,
    client_id: &ClientId,
    session: TrainingSession,
) -> RosterUpdate {
    let next = roster.updated(client_id, |client| client.sessions.push(session));
    RosterUpdate::from_result(roster, client_id, next)
}
