// ABOUTME: Domain service layer for roster history changes
// ABOUTME: Provides the caller-facing progress service around the pure history mutator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services combine the pure roster transformations with the side concerns a
//! caller needs: timestamps, policy, logging and notifications.

/// Weight logging, batch import, progress snapshots and sessions
pub mod progress;

pub use progress::ProgressService;
