// ABOUTME: Output formatting helpers for pierre-coach
// ABOUTME: Prints JSON documents to stdout and update outcomes to the log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_coaching::{
    errors::AppResult,
    history::{RosterUpdate, UpdateOutcome},
    roster_file::to_pretty_json,
};
use serde::Serialize;
use tracing::warn;

/// Print any value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}

/// Print the roster produced by an update, flagging unknown clients on stderr
pub fn print_update(update: &RosterUpdate) -> AppResult<()> {
    if let UpdateOutcome::ClientNotFound { client_id } = &update.outcome {
        warn!(client.id = %client_id, "Client not in roster; roster unchanged");
    }
    print_json(&update.roster)
}
