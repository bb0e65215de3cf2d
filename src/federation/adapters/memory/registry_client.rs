//! In-memory stand-in for an external registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::federation::{
    domain::ExternalRecord,
    ports::{RegistryClient, RegistryClientError, RegistryClientResult},
};

/// External registry held in memory, with a switch to simulate outages.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistryClient {
    state: Arc<RwLock<ClientState>>,
}

#[derive(Debug, Default)]
struct ClientState {
    records: HashMap<String, ExternalRecord>,
    unreachable: bool,
}

impl InMemoryRegistryClient {
    /// Creates an empty, reachable registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a record under its name, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError`] when the state lock is poisoned.
    pub fn publish(&self, record: ExternalRecord) -> RegistryClientResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.records.insert(record.name.clone(), record);
        Ok(())
    }

    /// Simulates the registry going down or coming back.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError`] when the state lock is poisoned.
    pub fn set_unreachable(&self, unreachable: bool) -> RegistryClientResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.unreachable = unreachable;
        Ok(())
    }

    fn ensure_reachable(state: &ClientState) -> RegistryClientResult<()> {
        if state.unreachable {
            return Err(RegistryClientError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "registry unreachable",
            )));
        }
        Ok(())
    }
}

fn lock_error(err: impl std::fmt::Display) -> RegistryClientError {
    RegistryClientError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl RegistryClient for InMemoryRegistryClient {
    async fn fetch(&self, name: &str) -> RegistryClientResult<Option<ExternalRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        Self::ensure_reachable(&state)?;
        Ok(state.records.get(name).cloned())
    }

    async fn ping(&self) -> RegistryClientResult<()> {
        let state = self.state.read().map_err(lock_error)?;
        Self::ensure_reachable(&state)
    }
}
