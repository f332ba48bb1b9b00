// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains the wall-clock abstraction used to stamp new records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Wall-clock abstraction (system and fixed clocks)
pub mod clock;
