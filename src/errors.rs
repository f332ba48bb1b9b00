// ABOUTME: Error handling re-exports for the coaching crate
// ABOUTME: AppError, ErrorCode and AppResult live in pierre-core and are shared workspace-wide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Re-exported from `pierre_core::errors` so binaries and tests can depend on
//! `pierre_coaching::errors` alone.

pub use pierre_core::errors::{AppError, AppResult, ErrorCode};
