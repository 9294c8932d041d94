//! Client registry: pane key → live transport handle
//!
//! Side table owned by the workbench. An entry appears when a machine
//! view's connection comes up and is removed (with a disconnect) when
//! the owning pane closes.

use std::collections::HashMap;
use std::fmt;

use gatehouse_protocol::PaneKey;

use crate::client::TransportClient;

/// Registered transport clients by pane key
#[derive(Default)]
pub struct ClientRegistry {
    clients: HashMap<PaneKey, Box<dyn TransportClient>>,
}

impl ClientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a client handle, returning the replaced one if any
    ///
    /// Last write wins; the replaced handle is returned undisconnected
    /// for the caller to decide about.
    pub fn insert(
        &mut self,
        key: PaneKey,
        client: Box<dyn TransportClient>,
    ) -> Option<Box<dyn TransportClient>> {
        self.clients.insert(key, client)
    }

    /// Get a client handle by pane key
    pub fn get(&self, key: PaneKey) -> Option<&dyn TransportClient> {
        self.clients.get(&key).map(|c| c.as_ref())
    }

    /// Get a mutable client handle by pane key
    pub fn get_mut(&mut self, key: PaneKey) -> Option<&mut (dyn TransportClient + 'static)> {
        self.clients.get_mut(&key).map(|c| c.as_mut())
    }

    /// Remove and return a client handle
    pub fn remove(&mut self, key: PaneKey) -> Option<Box<dyn TransportClient>> {
        self.clients.remove(&key)
    }

    /// Check if a client is registered for a pane
    pub fn contains(&self, key: PaneKey) -> bool {
        self.clients.contains_key(&key)
    }

    /// Get all pane keys with registered clients
    pub fn keys(&self) -> Vec<PaneKey> {
        self.clients.keys().copied().collect()
    }

    /// Get count of registered clients
    pub fn count(&self) -> usize {
        self.clients.len()
    }

    /// Disconnect and drop every registered client
    pub fn disconnect_all(&mut self) {
        for (_, mut client) in self.clients.drain() {
            client.disconnect();
        }
    }
}

impl fmt::Debug for ClientRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRegistry")
            .field("count", &self.clients.len())
            .finish()
    }
}
