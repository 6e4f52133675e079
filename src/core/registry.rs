//! Client registry
//!
//! In-memory directory of clients keyed by identity. The registry is the only
//! place where identity uniqueness is enforced.

use crate::types::{BankError, Client, Identity};
use std::collections::HashMap;

/// Directory of registered clients
///
/// Clients are stored in registration order; a map from identity to position
/// gives constant-time lookups. Clients are never removed.
#[derive(Debug, Default)]
pub struct Registry {
    clients: Vec<Client>,
    index: HashMap<Identity, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            clients: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a client
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIdentity` if a client with the same identity is
    /// already registered; the registry is left unchanged.
    pub fn register(&mut self, client: Client) -> Result<(), BankError> {
        if self.index.contains_key(client.identity()) {
            return Err(BankError::duplicate_identity(client.identity().as_str()));
        }

        self.index
            .insert(client.identity().clone(), self.clients.len());
        self.clients.push(client);

        Ok(())
    }

    /// Find the client with the given identity
    pub fn find(&self, identity: &Identity) -> Result<&Client, BankError> {
        self.index
            .get(identity)
            .map(|&position| &self.clients[position])
            .ok_or_else(|| BankError::not_found(identity.as_str()))
    }

    /// Find the client with the given identity for mutation
    pub fn find_mut(&mut self, identity: &Identity) -> Result<&mut Client, BankError> {
        match self.index.get(identity) {
            Some(&position) => Ok(&mut self.clients[position]),
            None => Err(BankError::not_found(identity.as_str())),
        }
    }

    /// Clients in registration order
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
