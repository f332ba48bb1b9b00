// ABOUTME: Re-exports command modules for pierre-coach
// ABOUTME: Provides roster mutation and roster report commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod report;
pub mod roster;
