// ABOUTME: Notification side channel for user-visible confirmations of roster changes
// ABOUTME: Notifier trait with tracing-backed and recording implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Notifications are fire-and-forget: a notifier cannot fail and cannot
//! influence the roster update that triggered it.

use crate::models::{ClientId, ExerciseId};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// A user-visible confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// A single set was logged interactively
    WeightLogged {
        /// Client the set was logged for
        client_id: ClientId,
        /// Exercise of the set
        exercise_id: ExerciseId,
        /// Load lifted
        weight: f64,
        /// Repetitions performed
        reps: u32,
    },
}

impl Notification {
    /// Short text suitable for a toast
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::WeightLogged {
                exercise_id,
                weight,
                reps,
                ..
            } => format!("Logged {weight} x {reps} for {exercise_id}"),
        }
    }
}

/// Delivers notifications to whatever surface the caller uses
pub trait Notifier {
    /// Deliver one notification
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::WeightLogged {
                client_id,
                exercise_id,
                ..
            } => info!(
                client.id = %client_id,
                exercise.id = %exercise_id,
                notification = %notification.message(),
                "Weight logged"
            ),
        }
    }
}

/// Keeps every notification in memory, in delivery order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications delivered so far
    #[must_use]
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification);
    }
}
