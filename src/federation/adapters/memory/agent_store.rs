//! In-memory agent store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::federation::{
    domain::CanonicalRecord,
    ports::{AgentStore, AgentStoreError, AgentStoreResult},
};

/// Thread-safe in-memory agent store keyed by `agent_id`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentStore {
    state: Arc<RwLock<HashMap<String, CanonicalRecord>>>,
}

impl InMemoryAgentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> AgentStoreError {
    AgentStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AgentStore for InMemoryAgentStore {
    async fn create(&self, record: &CanonicalRecord) -> AgentStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&record.agent_id) {
            return Err(AgentStoreError::DuplicateAgent(record.agent_id.clone()));
        }
        state.insert(record.agent_id.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, agent_id: &str) -> AgentStoreResult<Option<CanonicalRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(agent_id).cloned())
    }

    async fn update(&self, record: &CanonicalRecord) -> AgentStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let existing = state
            .get_mut(&record.agent_id)
            .ok_or_else(|| AgentStoreError::NotFound(record.agent_id.clone()))?;
        existing.clone_from(record);
        Ok(())
    }

    async fn delete(&self, agent_id: &str) -> AgentStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .remove(agent_id)
            .map(|_| ())
            .ok_or_else(|| AgentStoreError::NotFound(agent_id.to_owned()))
    }

    async fn ping(&self) -> AgentStoreResult<()> {
        self.state.read().map(|_| ()).map_err(lock_error)
    }
}
