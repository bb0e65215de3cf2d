//! Adapter over the local agent store.

use super::{record_health, snapshot};
use crate::federation::{
    domain::{
        AdapterKind, CanonicalRecord, NANDA_SCHEMA_VERSION, NANDA_SOURCE_SCHEMA,
        RegistryDescriptor, RegistryId, RegistryStatus, SourceRecord,
    },
    ports::{AdapterError, AdapterResult, AgentStore, RegistryAdapter},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Serves the local registry from an [`AgentStore`].
///
/// Stored records are already canonical. Defaults the store left blank are
/// filled as records leave the store, so `translate_to_nanda` is the
/// identity.
pub struct LocalAdapter<S, C>
where
    S: AgentStore + ?Sized,
    C: Clock + Send + Sync,
{
    registry_id: RegistryId,
    store: Arc<S>,
    clock: Arc<C>,
    descriptor: RwLock<RegistryDescriptor>,
}

impl<S, C> LocalAdapter<S, C>
where
    S: AgentStore + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a local adapter for `registry_id`.
    #[must_use]
    pub fn new(registry_id: RegistryId, store: Arc<S>, clock: Arc<C>) -> Self {
        let descriptor = RegistryDescriptor::new(registry_id.clone(), AdapterKind::Local);
        Self {
            registry_id,
            store,
            clock,
            descriptor: RwLock::new(descriptor),
        }
    }

    fn fill_defaults(&self, mut record: CanonicalRecord) -> CanonicalRecord {
        if record.registry_id.is_empty() {
            record.registry_id = String::from(&self.registry_id);
        }
        if record.agent_name.is_empty() {
            record.agent_name.clone_from(&record.agent_id);
        }
        if record.schema_version.is_empty() {
            record.schema_version = NANDA_SCHEMA_VERSION.to_owned();
        }
        if record.source_schema.is_empty() {
            record.source_schema = NANDA_SOURCE_SCHEMA.to_owned();
        }
        record
    }
}

#[async_trait]
impl<S, C> RegistryAdapter for LocalAdapter<S, C>
where
    S: AgentStore + ?Sized,
    C: Clock + Send + Sync,
{
    fn registry_id(&self) -> &RegistryId {
        &self.registry_id
    }

    async fn query_agent(&self, name: &str) -> AdapterResult<SourceRecord> {
        match self.store.find(name).await {
            Ok(Some(record)) => Ok(SourceRecord::Local(self.fill_defaults(record))),
            Ok(None) => Err(AdapterError::not_found(&self.registry_id, name)),
            Err(err) => {
                warn!(registry = %self.registry_id, agent = name, error = %err, "local store lookup failed");
                Err(AdapterError::unavailable(&self.registry_id, err.to_string()))
            }
        }
    }

    fn translate_to_nanda(&self, record: SourceRecord) -> AdapterResult<CanonicalRecord> {
        match record {
            SourceRecord::Local(canonical) => Ok(canonical),
            other @ SourceRecord::External(_) => Err(AdapterError::MismatchedRecord {
                registry_id: self.registry_id.clone(),
                found: other.shape(),
            }),
        }
    }

    fn get_registry_info(&self) -> RegistryDescriptor {
        snapshot(&self.descriptor)
    }

    async fn check_health(&self) -> RegistryDescriptor {
        let status = match self.store.ping().await {
            Ok(()) => RegistryStatus::Active,
            Err(err) => {
                warn!(registry = %self.registry_id, error = %err, "local store health check failed");
                RegistryStatus::Unreachable
            }
        };
        record_health(&self.descriptor, status, self.clock.utc())
    }
}
