// ABOUTME: Core data models for the Pierre coaching roster
// ABOUTME: Re-exports Roster, Client, WeightHistory, ProgressSnapshot and identifier types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain structured data shared between the history mutator and the
//! aggregation builders.
//!
//! ## Core Models
//!
//! - `Roster`: versioned snapshot of all coached clients
//! - `Client`: one coached individual with goal and histories
//! - `WeightHistory`: exercise-scoped strength record
//! - `ProgressSnapshot`: dated body measurement
//! - `TrainingSession`: logged session used for weekly volume

mod client;
mod ids;
mod progress;
mod roster;
mod session;
mod weight_history;

pub use client::Client;
pub use ids::{ClientId, ExerciseId};
pub use progress::{ProgressMetric, ProgressSnapshot};
pub use roster::Roster;
pub use session::TrainingSession;
pub use weight_history::{WeightEntry, WeightHistory};
