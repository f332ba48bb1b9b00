// ABOUTME: System-wide constants for the Pierre coaching crate
// ABOUTME: Re-exports the domain constants defined in pierre-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

pub use pierre_core::constants::{env_config, progress, service_names, time_constants};
