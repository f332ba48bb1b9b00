// ABOUTME: Versioned, copy-on-write roster snapshot of coached clients
// ABOUTME: Replacing one client shares every other client by Arc and bumps the version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Client, ClientId};
use crate::constants::progress::MAX_ROSTER_VERSION;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered collection of clients keyed by id
///
/// A `Roster` is an immutable snapshot. Updates produce a new snapshot in which
/// the targeted client is replaced in place and every other client is the same
/// `Arc` as before, so observers can skip unchanged rows with `Arc::ptr_eq`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RosterDocument")]
pub struct Roster {
    version: u64,
    clients: Vec<Arc<Client>>,
}

/// Wire shape of a roster before id uniqueness is checked
#[derive(Deserialize)]
struct RosterDocument {
    #[serde(default)]
    version: u64,
    #[serde(default)]
    clients: Vec<Client>,
}

impl TryFrom<RosterDocument> for Roster {
    type Error = AppError;

    fn try_from(document: RosterDocument) -> AppResult<Self> {
        Self::with_version(document.version, document.clients)
    }
}

impl Roster {
    /// Build a roster at version 0
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if two clients share an id
    pub fn new(clients: Vec<Client>) -> AppResult<Self> {
        Self::with_version(0, clients)
    }

    /// Build a roster at an explicit version
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `version` exceeds [`MAX_ROSTER_VERSION`],
    /// or `ResourceAlreadyExists` if two clients share an id
    pub fn with_version(version: u64, clients: Vec<Client>) -> AppResult<Self> {
        if version > MAX_ROSTER_VERSION {
            return Err(AppError::out_of_range(format!(
                "roster version {version} exceeds maximum {MAX_ROSTER_VERSION}"
            )));
        }

        let mut seen = HashSet::with_capacity(clients.len());
        for client in &clients {
            if !seen.insert(client.id()) {
                return Err(AppError::already_exists(format!("Client {}", client.id()))
                    .with_resource_id(client.id().as_str()));
            }
        }

        Ok(Self {
            version,
            clients: clients.into_iter().map(Arc::new).collect(),
        })
    }

    /// Snapshot version; incremented by every applied update
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Number of clients
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the roster has no clients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Clients in roster order
    #[must_use]
    pub fn clients(&self) -> &[Arc<Client>] {
        &self.clients
    }

    /// Iterate clients in roster order
    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter().map(Arc::as_ref)
    }

    /// Position of a client in roster order
    #[must_use]
    pub fn position(&self, id: &ClientId) -> Option<usize> {
        self.clients.iter().position(|client| client.id() == id)
    }

    /// Look up a client by id
    #[must_use]
    pub fn get(&self, id: &ClientId) -> Option<&Arc<Client>> {
        self.clients.iter().find(|client| client.id() == id)
    }

    /// Apply `update` to a copy of one client and return the next snapshot
    ///
    /// Returns `None` when no client has the given id; `self` is never modified.
    #[must_use]
    pub fn updated<F>(&self, id: &ClientId, update: F) -> Option<Self>
    where
        F: FnOnce(&mut Client),
    {
        let index = self.position(id)?;
        let mut client = Client::clone(&self.clients[index]);
        update(&mut client);
        Some(self.replaced_at(index, client))
    }

    /// Fallible variant of [`Roster::updated`]
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `update`; no snapshot is produced
    pub fn try_updated<F>(&self, id: &ClientId, update: F) -> AppResult<Option<Self>>
    where
        F: FnOnce(&mut Client) -> AppResult<()>,
    {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let mut client = Client::clone(&self.clients[index]);
        update(&mut client)?;
        Ok(Some(self.replaced_at(index, client)))
    }

    fn replaced_at(&self, index: usize, client: Client) -> Self {
        let mut clients = self.clients.clone();
        clients[index] = Arc::new(client);

        Self {
            // Loaded versions stop at MAX_ROSTER_VERSION, far below saturation
            version: self.version.saturating_add(1),
            clients,
        }
    }
}
