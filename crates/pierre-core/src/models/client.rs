// ABOUTME: Coached client entity with goal, progress snapshots and training records
// ABOUTME: Client keeps its id private so no mutation can change a client's identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ClientId, ProgressSnapshot, TrainingSession, WeightHistory};
use serde::{Deserialize, Serialize};

/// A coached individual
///
/// The identifier is fixed at construction; every other field is plain data.
/// `weight_history` is the union of independent per-exercise histories.
///
/// # Examples
///
/// ```rust
/// use pierre_core::models::Client;
///
/// let client = Client::new("c-1", "Ana Souza", 72.0);
/// assert_eq!(client.id().as_str(), "c-1");
/// assert!(client.weight_history.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    /// Full display name
    pub name: String,
    /// Target value for the client (typically target body weight)
    pub goal: f64,
    /// Body measurements in recording order
    #[serde(default)]
    pub progress: Vec<ProgressSnapshot>,
    /// Strength records across all exercises
    #[serde(default)]
    pub weight_history: Vec<WeightHistory>,
    /// Logged training sessions
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
}

impl Client {
    /// Create a client with empty histories
    pub fn new(id: impl Into<ClientId>, name: impl Into<String>, goal: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            goal,
            progress: Vec::new(),
            weight_history: Vec::new(),
            sessions: Vec::new(),
        }
    }

    /// Client identifier
    #[must_use]
    pub const fn id(&self) -> &ClientId {
        &self.id
    }

    /// Replace the progress snapshots
    #[must_use]
    pub fn with_progress(mut self, progress: Vec<ProgressSnapshot>) -> Self {
        self.progress = progress;
        self
    }

    /// Replace the weight history
    #[must_use]
    pub fn with_weight_history(mut self, weight_history: Vec<WeightHistory>) -> Self {
        self.weight_history = weight_history;
        self
    }

    /// Replace the logged sessions
    #[must_use]
    pub fn with_sessions(mut self, sessions: Vec<TrainingSession>) -> Self {
        self.sessions = sessions;
        self
    }
}
