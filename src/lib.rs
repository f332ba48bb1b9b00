// ABOUTME: Main library entry point for the Pierre coaching progress subsystem
// ABOUTME: History mutation, aggregation re-exports, configuration, logging, and notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Coaching
//!
//! Progress tracking for a coaching roster: the operations that change a
//! client's weight-training and body-measurement history, and the projections
//! that charts and comparisons are built from.
//!
//! ## Architecture
//!
//! - **History**: pure `(Roster, request) -> RosterUpdate` mutations
//! - **Aggregation**: read-only view models (re-exported from `pierre-intelligence`)
//! - **Services**: clock, policy, logging and notifications around the mutations
//! - **Config**: environment-driven settings
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_coaching::aggregation::comparison_rows;
//! use pierre_coaching::history::{append_weight_record, AppendWeightRecord};
//! use pierre_coaching::models::{Client, Roster};
//!
//! # fn main() -> pierre_coaching::errors::AppResult<()> {
//! let roster = Roster::new(vec![Client::new("c-1", "Ana Souza", 60.0)])?;
//! let request = AppendWeightRecord::new("c-1", "bench", 40.0, 8);
//! let update = append_weight_record(&roster, &request, chrono::Utc::now());
//!
//! assert!(update.is_applied());
//! assert_eq!(comparison_rows(&update.roster)[0].short_name, "Ana");
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Re-exported domain constants
pub mod constants;

/// Unified error types
pub mod errors;

/// Pure roster history mutations
pub mod history;

/// Structured logging setup
pub mod logging;

/// Roster data models
pub mod models;

/// User-visible notification side channel
pub mod notifications;

/// JSON document helpers for the CLI
pub mod roster_file;

/// Progress service around the history mutator
pub mod services;

/// Clock abstraction
pub mod utils;

/// Read-only roster projections
pub use pierre_intelligence::aggregation;
