// ABOUTME: Configuration management module for the coaching crate
// ABOUTME: Environment-only configuration for progress tracking behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Pierre coaching
//!
//! All settings come from environment variables; there is no configuration
//! file. Logging configuration lives in `crate::logging`.

/// Progress tracking configuration (unknown-client policy, notifications)
pub mod progress;

pub use progress::{ProgressConfig, UnknownClientPolicy};
