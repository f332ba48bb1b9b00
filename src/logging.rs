// ABOUTME: Logging configuration and structured logging setup for the coaching crate
// ABOUTME: Configures log levels, formatters, and output destinations via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! One global subscriber is installed per process. The CLI sends logs to
//! stderr so that stdout carries only JSON output.

use crate::constants::service_names;
use crate::history::UpdateOutcome;
use crate::models::Roster;
use anyhow::Result;
use std::env;
use std::io;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Crates whose events follow the configured level even when `RUST_LOG`
/// names other targets
const WORKSPACE_TARGETS: [&str; 2] = ["pierre_coaching", "pierre_intelligence"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive or bare level (`info`, `pierre_coaching=debug`)
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Output stream
    pub target: LogTarget,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Reported as `service.name` in the startup event
    pub service_name: String,
    /// Reported as `service.version` in the startup event
    pub service_version: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human-readable lines
    Pretty,
    /// Single-line output without targets or locations
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; unknown values select [`LogFormat::Pretty`]
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Stream that receives log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

impl LogTarget {
    /// Parse a `LOG_TARGET` value; anything but `stderr` selects stdout
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("stderr") {
            Self::Stderr
        } else {
            Self::Stdout
        }
    }

    fn writer(self) -> BoxMakeWriter {
        match self {
            Self::Stdout => BoxMakeWriter::new(io::stdout),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            target: LogTarget::Stdout,
            include_location: false,
            service_name: service_names::PIERRE_COACHING.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_TARGET`, `LOG_INCLUDE_LOCATION`,
    /// `SERVICE_NAME`, `SERVICE_VERSION` and `ENVIRONMENT`
    ///
    /// Production environments always include source locations.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::parse_or_default(&value)),
            target: env::var("LOG_TARGET")
                .map_or(defaults.target, |value| LogTarget::parse_or_default(&value)),
            include_location: environment == "production"
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// Filter from `level`, with the workspace crates pinned to it when it is
    /// a bare level
    fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::new(&self.level);
        if !self.level.contains('=') {
            for target in WORKSPACE_TARGETS {
                if let Ok(directive) = format!("{target}={}", self.level).parse() {
                    filter = filter.add_directive(directive);
                }
            }
        }
        filter
    }

    fn fmt_layer(&self) -> BoxedLayer {
        let writer = self.target.writer();
        let filter = self.env_filter();

        match self.format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
        }
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.fmt_layer())
            .try_init()?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Structured events for roster changes
pub struct AppLogger;

impl AppLogger {
    /// Log the result of a roster mutation
    pub fn log_roster_update(
        operation: &str,
        client_id: &str,
        exercise_id: Option<&str>,
        outcome: &UpdateOutcome,
        roster: &Roster,
    ) {
        let exercise_id = exercise_id.unwrap_or_default();
        match outcome {
            UpdateOutcome::Applied => info!(
                roster.operation = operation,
                client.id = client_id,
                exercise.id = exercise_id,
                roster.version = roster.version(),
                "Roster updated"
            ),
            UpdateOutcome::ClientNotFound { .. } => warn!(
                roster.operation = operation,
                client.id = client_id,
                exercise.id = exercise_id,
                roster.version = roster.version(),
                "Roster update skipped: unknown client"
            ),
        }
    }
}
