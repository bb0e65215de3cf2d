//! Local agent store port.

use crate::federation::domain::CanonicalRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent store operations.
pub type AgentStoreResult<T> = Result<T, AgentStoreError>;

/// Document store holding local agent records keyed by `agent_id`.
#[async_trait]
pub trait AgentStore: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::DuplicateAgent`] when the identifier is
    /// already taken.
    async fn create(&self, record: &CanonicalRecord) -> AgentStoreResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when no record exists.
    async fn find(&self, agent_id: &str) -> AgentStoreResult<Option<CanonicalRecord>>;

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::NotFound`] when the record does not exist.
    async fn update(&self, record: &CanonicalRecord) -> AgentStoreResult<()>;

    /// Deletes a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::NotFound`] when the record does not exist.
    async fn delete(&self, agent_id: &str) -> AgentStoreResult<()>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AgentStoreError::Persistence`] when the store cannot be
    /// reached.
    async fn ping(&self) -> AgentStoreResult<()>;
}

/// Errors returned by agent store implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentStoreError {
    /// A record with the same identifier already exists.
    #[error("duplicate agent identifier: {0}")]
    DuplicateAgent(String),

    /// The record was not found.
    #[error("agent not found: {0}")]
    NotFound(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
