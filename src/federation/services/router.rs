//! Identifier routing across registry adapters.

use crate::federation::{
    domain::{AgentIdentifier, CanonicalRecord, IdentifierError, RegistryDescriptor, RegistryId},
    ports::{AdapterError, RegistryAdapter},
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by [`Router`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    /// The identifier names a registry that is not configured.
    #[error("unknown registry: {0}")]
    UnknownRegistry(String),

    /// The identifier could not be parsed.
    #[error(transparent)]
    InvalidIdentifier(IdentifierError),

    /// Two adapters were registered under the same identifier.
    #[error("registry {0} is already registered")]
    DuplicateRegistry(RegistryId),

    /// The selected adapter failed; passed through unchanged.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Dispatches agent identifiers to registry adapters.
///
/// The adapter map is fixed at construction; lookups only read it.
#[derive(Clone)]
pub struct Router {
    local: RegistryId,
    adapters: Vec<Arc<dyn RegistryAdapter>>,
    index: HashMap<RegistryId, usize>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("local", &self.local)
            .field(
                "registries",
                &self
                    .adapters
                    .iter()
                    .map(|adapter| adapter.registry_id())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Router {
    /// Creates a router whose unqualified identifiers go to `local`.
    #[must_use]
    pub fn new(local: Arc<dyn RegistryAdapter>) -> Self {
        let local_id = local.registry_id().clone();
        let mut index = HashMap::new();
        index.insert(local_id.clone(), 0);
        Self {
            local: local_id,
            adapters: vec![local],
            index,
        }
    }

    /// Registers an additional adapter.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::DuplicateRegistry`] when an adapter with the
    /// same registry identifier is already registered.
    pub fn with_adapter(mut self, adapter: Arc<dyn RegistryAdapter>) -> Result<Self, RouterError> {
        let registry_id = adapter.registry_id().clone();
        if self.index.contains_key(&registry_id) {
            return Err(RouterError::DuplicateRegistry(registry_id));
        }
        self.index.insert(registry_id, self.adapters.len());
        self.adapters.push(adapter);
        Ok(self)
    }

    /// Returns the registry that serves unqualified identifiers.
    #[must_use]
    pub const fn local_registry(&self) -> &RegistryId {
        &self.local
    }

    /// Returns the adapter registered under `registry_id`.
    #[must_use]
    pub fn adapter(&self, registry_id: &RegistryId) -> Option<&Arc<dyn RegistryAdapter>> {
        self.index
            .get(registry_id)
            .and_then(|&position| self.adapters.get(position))
    }

    /// Resolves an identifier to a canonical record.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidIdentifier`] for blank identifiers or
    /// names, [`RouterError::UnknownRegistry`] for malformed or unregistered
    /// prefixes, and [`RouterError::Adapter`] when the adapter fails.
    pub async fn resolve(&self, identifier: &str) -> Result<CanonicalRecord, RouterError> {
        let parsed = AgentIdentifier::parse(identifier).map_err(|err| match err {
            IdentifierError::MalformedPrefix(value) => RouterError::UnknownRegistry(value),
            other => RouterError::InvalidIdentifier(other),
        })?;
        let adapter = self.select(&parsed)?;

        debug!(
            identifier,
            registry = %adapter.registry_id(),
            agent = parsed.name(),
            "routing agent lookup"
        );

        Ok(adapter.lookup(parsed.name()).await?)
    }

    fn select(&self, identifier: &AgentIdentifier) -> Result<&Arc<dyn RegistryAdapter>, RouterError> {
        let registry_id = match identifier {
            AgentIdentifier::Local(_) => self.local.clone(),
            AgentIdentifier::Qualified { registry, .. } => RegistryId::new(registry.as_str())
                .map_err(|_| RouterError::UnknownRegistry(registry.clone()))?,
        };
        self.adapter(&registry_id)
            .ok_or_else(|| RouterError::UnknownRegistry(String::from(&registry_id)))
    }

    /// Returns one descriptor per adapter, in registration order.
    #[must_use]
    pub fn list_registries(&self) -> Vec<RegistryDescriptor> {
        self.adapters
            .iter()
            .map(|adapter| adapter.get_registry_info())
            .collect()
    }

    /// Runs a health check on every adapter, in registration order.
    pub async fn refresh_health(&self) -> Vec<RegistryDescriptor> {
        let mut descriptors = Vec::with_capacity(self.adapters.len());
        for adapter in &self.adapters {
            descriptors.push(adapter.check_health().await);
        }
        descriptors
    }
}
