// ABOUTME: Progress tracking service wrapping the pure history mutator
// ABOUTME: Stamps wall-clock time, applies the unknown-client policy, logs, and notifies on single logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{ProgressConfig, UnknownClientPolicy};
use crate::errors::{AppError, AppResult};
use crate::history::{self, AppendWeightRecord, RosterUpdate, UpdateOutcome};
use crate::logging::AppLogger;
use crate::models::{ClientId, ExerciseId, ProgressSnapshot, Roster, TrainingSession, WeightEntry};
use crate::notifications::{Notification, Notifier, TracingNotifier};
use crate::utils::clock::{Clock, SystemClock};

/// Caller-facing entry point for roster history changes
///
/// The service owns no roster: each call takes the current snapshot and returns
/// the next one for the caller to publish.
#[derive(Debug)]
pub struct ProgressService<N = TracingNotifier, C = SystemClock> {
    config: ProgressConfig,
    notifier: N,
    clock: C,
}

impl ProgressService {
    /// Service with the system clock and log-backed notifications
    #[must_use]
    pub const fn new(config: ProgressConfig) -> Self {
        Self {
            config,
            notifier: TracingNotifier,
            clock: SystemClock,
        }
    }
}

impl<N: Notifier, C: Clock> ProgressService<N, C> {
    /// Service with explicit collaborators
    #[must_use]
    pub const fn with_parts(config: ProgressConfig, notifier: N, clock: C) -> Self {
        Self {
            config,
            notifier,
            clock,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Log one set, stamped with the current time
    ///
    /// Emits a [`Notification::WeightLogged`] when the client exists and
    /// notifications are enabled.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown client under the strict policy
    pub fn log_weight(
        &self,
        roster: &Roster,
        request: &AppendWeightRecord,
    ) -> AppResult<RosterUpdate> {
        let update = history::append_weight_record(roster, request, self.clock.now());
        AppLogger::log_roster_update(
            "log_weight",
            request.client_id.as_str(),
            Some(request.exercise_id.as_str()),
            &update.outcome,
            &update.roster,
        );
        let update = self.enforce_policy(update)?;

        if update.is_applied() && self.config.notify_on_log {
            self.notifier.notify(&Notification::WeightLogged {
                client_id: request.client_id.clone(),
                exercise_id: request.exercise_id.clone(),
                weight: request.weight,
                reps: request.reps,
            });
        }
        Ok(update)
    }

    /// Replace all records of one exercise; never notifies
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown client under the strict policy
    pub fn import_exercise(
        &self,
        roster: &Roster,
        client_id: &ClientId,
        exercise_id: &ExerciseId,
        entries: &[WeightEntry],
    ) -> AppResult<RosterUpdate> {
        let update = history::replace_exercise_records(roster, client_id, exercise_id, entries);
        AppLogger::log_roster_update(
            "import_exercise",
            client_id.as_str(),
            Some(exercise_id.as_str()),
            &update.outcome,
            &update.roster,
        );
        self.enforce_policy(update)
    }

    /// Append a progress snapshot
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a snapshot older than the latest one, or
    /// `ResourceNotFound` for an unknown client under the strict policy
    pub fn record_progress(
        &self,
        roster: &Roster,
        client_id: &ClientId,
        snapshot: ProgressSnapshot,
    ) -> AppResult<RosterUpdate> {
        let update = history::record_progress(roster, client_id, snapshot)?;
        AppLogger::log_roster_update(
            "record_progress",
            client_id.as_str(),
            None,
            &update.outcome,
            &update.roster,
        );
        self.enforce_policy(update)
    }

    /// Append a training session
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown client under the strict policy
    pub fn log_session(
        &self,
        roster: &Roster,
        client_id: &ClientId,
        session: TrainingSession,
    ) -> AppResult<RosterUpdate> {
        let update = history::log_session(roster, client_id, session);
        AppLogger::log_roster_update(
            "log_session",
            client_id.as_str(),
            None,
            &update.outcome,
            &update.roster,
        );
        self.enforce_policy(update)
    }

    fn enforce_policy(&self, update: RosterUpdate) -> AppResult<RosterUpdate> {
        match (&update.outcome, self.config.unknown_client_policy) {
            (UpdateOutcome::ClientNotFound { client_id }, UnknownClientPolicy::Strict) => {
                Err(AppError::not_found(format!("Client {client_id}"))
                    .with_resource_id(client_id.as_str()))
            }
            _ => Ok(update),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Client;
    use crate::notifications::RecordingNotifier;
    use crate::utils::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_notifications_can_be_disabled() {
        let config = ProgressConfig {
            notify_on_log: false,
            ..ProgressConfig::default()
        };
        let recorder = RecordingNotifier::new();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 1, 5, 6, 0, 0).unwrap());
        let service = ProgressService::with_parts(config, &recorder, clock);
        let roster = Roster::new(vec![Client::new("a", "Ana", 60.0)]).unwrap();

        let update = service
            .log_weight(&roster, &AppendWeightRecord::new("a", "bench", 40.0, 8))
            .unwrap();

        assert!(update.is_applied());
        assert!(recorder.sent().is_empty());
    }
}
