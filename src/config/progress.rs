// ABOUTME: Progress tracking configuration loaded from environment variables
// ABOUTME: Unknown-client policy, single-log notifications, and default roster location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// How updates that target a missing client are surfaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownClientPolicy {
    /// Return the unchanged roster with a `ClientNotFound` outcome
    #[default]
    Lenient,
    /// Fail with `ResourceNotFound`
    Strict,
}

impl FromStr for UnknownClientPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(AppError::config_invalid(format!(
                "unknown client policy '{other}' (expected 'lenient' or 'strict')"
            ))),
        }
    }
}

impl fmt::Display for UnknownClientPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Progress tracking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Handling of updates for ids missing from the roster
    pub unknown_client_policy: UnknownClientPolicy,
    /// Emit a notification after each interactive weight log
    pub notify_on_log: bool,
    /// Roster document used when the CLI gets no `--roster`
    pub roster_path: Option<PathBuf>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            unknown_client_policy: UnknownClientPolicy::Lenient,
            notify_on_log: true,
            roster_path: None,
        }
    }
}

impl ProgressConfig {
    /// Load configuration from environment, rejecting malformed values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed
    pub fn try_from_env() -> AppResult<Self> {
        let unknown_client_policy = match env::var(env_config::UNKNOWN_CLIENT_POLICY) {
            Ok(value) => value.parse()?,
            Err(_) => UnknownClientPolicy::default(),
        };

        let notify_on_log = match env::var(env_config::NOTIFY_ON_LOG) {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                AppError::config_invalid(format!(
                    "{} must be true/false, got '{value}'",
                    env_config::NOTIFY_ON_LOG
                ))
            })?,
            Err(_) => true,
        };

        let roster_path = env::var(env_config::ROSTER_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            unknown_client_policy,
            notify_on_log,
            roster_path,
        })
    }

    /// Load configuration from environment, falling back to defaults on bad values
    #[must_use]
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|error| {
            warn!(error = %error, "Invalid progress configuration, using defaults");
            Self::default()
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
