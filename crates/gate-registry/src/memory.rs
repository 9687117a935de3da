//! In-memory client registry.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::client::Client;
use crate::error::RegistryError;
use crate::traits::ClientRegistry;

/// Simple in-memory registry keyed by credential.
///
/// Suitable for tests and small fixed deployments. For provisioned user
/// bases use [`SqlRegistry`](crate::SqlRegistry).
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    clients: HashMap<String, Client>,
}

impl MemoryRegistry {
    /// Create a new empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a set of client records.
    pub fn from_clients<I>(clients: I) -> Self
    where
        I: IntoIterator<Item = Client>,
    {
        let clients = clients
            .into_iter()
            .map(|c| (c.credential.clone(), c))
            .collect();
        Self { clients }
    }

    /// Add a client record, replacing any existing one with the same
    /// credential.
    #[inline]
    pub fn insert(&mut self, client: Client) {
        self.clients.insert(client.credential.clone(), client);
    }

    /// Number of registered clients.
    #[inline]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl ClientRegistry for MemoryRegistry {
    async fn find_by_credential(&self, credential: &str) -> Result<Client, RegistryError> {
        self.clients
            .get(credential)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }
}
