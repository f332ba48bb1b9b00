// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for progress tracking, environment keys, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Progress tracking defaults
pub mod progress {
    /// Value reported for a metric when a client has no progress snapshot carrying it
    pub const DEFAULT_METRIC_VALUE: f64 = 0.0;

    /// Label format separator for ISO week buckets (`2026-W03`)
    pub const ISO_WEEK_LABEL_SEPARATOR: &str = "-W";

    /// Highest roster version accepted when a roster is built or loaded
    ///
    /// Kept within `i64` so stored versions survive signed-integer consumers.
    pub const MAX_ROSTER_VERSION: u64 = i64::MAX as u64;
}

/// Time conversion constants
pub mod time_constants {
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR_F64: f64 = 60.0;
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Unknown-client policy (`lenient` or `strict`)
    pub const UNKNOWN_CLIENT_POLICY: &str = "PIERRE_UNKNOWN_CLIENT_POLICY";

    /// Whether single weight logs emit a notification
    pub const NOTIFY_ON_LOG: &str = "PIERRE_NOTIFY_ON_LOG";

    /// Default roster document used by the CLI
    pub const ROSTER_PATH: &str = "PIERRE_ROSTER_PATH";
}

/// Service names used in structured logs
pub mod service_names {
    /// Coaching service name
    pub const PIERRE_COACHING: &str = "pierre-coaching";
}
