//! The registry adapter capability set.

use crate::federation::domain::{CanonicalRecord, RegistryDescriptor, RegistryId, SourceRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Uniform access to one registry.
///
/// Implementations never let transport or storage errors escape: every
/// failure is reported as an [`AdapterError`].
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Returns the registry this adapter serves.
    fn registry_id(&self) -> &RegistryId;

    /// Fetches the raw record for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::NotFound`] when the registry has no such
    /// agent or [`AdapterError::Unavailable`] when it cannot be reached.
    async fn query_agent(&self, name: &str) -> AdapterResult<SourceRecord>;

    /// Converts a raw record into the canonical shape.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::MismatchedRecord`] when the record shape is not
    /// the one this adapter produces.
    fn translate_to_nanda(&self, record: SourceRecord) -> AdapterResult<CanonicalRecord>;

    /// Queries and translates in one step.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::query_agent`] and
    /// [`Self::translate_to_nanda`].
    async fn lookup(&self, name: &str) -> AdapterResult<CanonicalRecord> {
        let record = self.query_agent(name).await?;
        self.translate_to_nanda(record)
    }

    /// Returns the current registry descriptor.
    fn get_registry_info(&self) -> RegistryDescriptor;

    /// Probes the backing registry and records the outcome.
    async fn check_health(&self) -> RegistryDescriptor;
}

/// Errors returned by registry adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// The registry has no agent with this name.
    #[error("agent '{name}' not found in registry {registry_id}")]
    NotFound {
        /// Registry that was queried.
        registry_id: RegistryId,
        /// Requested agent name.
        name: String,
    },

    /// The registry could not be reached or timed out.
    #[error("registry {registry_id} unavailable: {reason}")]
    Unavailable {
        /// Registry that was queried.
        registry_id: RegistryId,
        /// Diagnostic reason.
        reason: String,
    },

    /// The adapter was handed a record of the wrong shape.
    #[error("registry {registry_id} cannot translate a {found} record")]
    MismatchedRecord {
        /// Registry whose adapter rejected the record.
        registry_id: RegistryId,
        /// Shape that was received.
        found: &'static str,
    },
}

impl AdapterError {
    /// Creates a not-found error.
    pub fn not_found(registry_id: &RegistryId, name: impl Into<String>) -> Self {
        Self::NotFound {
            registry_id: registry_id.clone(),
            name: name.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(registry_id: &RegistryId, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            registry_id: registry_id.clone(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`AdapterError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for [`AdapterError::Unavailable`].
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
