//! Connected client of an external registry protocol.

use crate::federation::domain::ExternalRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry client calls.
pub type RegistryClientResult<T> = Result<T, RegistryClientError>;

/// Transport to an external registry, injected already connected.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetches the record published under `name`.
    ///
    /// Returns `None` when the registry has no such agent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError`] on any transport or protocol failure.
    async fn fetch(&self, name: &str) -> RegistryClientResult<Option<ExternalRecord>>;

    /// Checks that the registry is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError`] when the registry cannot be reached.
    async fn ping(&self) -> RegistryClientResult<()>;
}

/// Errors raised by registry client implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryClientError {
    /// The registry could not be reached.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The registry answered with something that is not a record.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl RegistryClientError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
