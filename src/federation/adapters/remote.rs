//! Adapter over an external registry client.

use super::{record_health, snapshot};
use crate::federation::{
    domain::{CanonicalRecord, RegistryDescriptor, RegistryId, RegistryStatus, SourceRecord},
    ports::{AdapterError, AdapterResult, RegistryAdapter, RegistryClient},
    services::SchemaTranslator,
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Bound applied to every client call unless configured otherwise.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Serves an external registry through a [`RegistryClient`].
///
/// Every client call is bounded by a timeout. Client errors and elapsed
/// timeouts surface as [`AdapterError::Unavailable`]. Dropping a lookup
/// future drops the in-flight client call with it.
pub struct RemoteAdapter<T, C>
where
    T: RegistryClient + ?Sized,
    C: Clock + Send + Sync,
{
    registry_id: RegistryId,
    client: Arc<T>,
    translator: SchemaTranslator,
    clock: Arc<C>,
    timeout: Duration,
    descriptor: RwLock<RegistryDescriptor>,
}

impl<T, C> RemoteAdapter<T, C>
where
    T: RegistryClient + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a remote adapter described by `descriptor`.
    #[must_use]
    pub fn new(
        descriptor: RegistryDescriptor,
        client: Arc<T>,
        translator: SchemaTranslator,
        clock: Arc<C>,
    ) -> Self {
        let registry_id = descriptor.registry_id().clone();
        let mapped = descriptor.with_skill_mapping(translator.mapper().is_available());
        Self {
            registry_id,
            client,
            translator,
            clock,
            timeout: DEFAULT_REMOTE_TIMEOUT,
            descriptor: RwLock::new(mapped),
        }
    }

    /// Overrides the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = limit;
        self
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn timed_out(&self) -> String {
        format!("no response within {}ms", self.timeout.as_millis())
    }
}

#[async_trait]
impl<T, C> RegistryAdapter for RemoteAdapter<T, C>
where
    T: RegistryClient + ?Sized,
    C: Clock + Send + Sync,
{
    fn registry_id(&self) -> &RegistryId {
        &self.registry_id
    }

    async fn query_agent(&self, name: &str) -> AdapterResult<SourceRecord> {
        match timeout(self.timeout, self.client.fetch(name)).await {
            Ok(Ok(Some(record))) => Ok(SourceRecord::External(record)),
            Ok(Ok(None)) => Err(AdapterError::not_found(&self.registry_id, name)),
            Ok(Err(err)) => {
                warn!(registry = %self.registry_id, agent = name, error = %err, "remote registry query failed");
                Err(AdapterError::unavailable(&self.registry_id, err.to_string()))
            }
            Err(_) => {
                let reason = self.timed_out();
                warn!(registry = %self.registry_id, agent = name, %reason, "remote registry query timed out");
                Err(AdapterError::unavailable(&self.registry_id, reason))
            }
        }
    }

    fn translate_to_nanda(&self, record: SourceRecord) -> AdapterResult<CanonicalRecord> {
        match record {
            SourceRecord::External(external) => {
                Ok(self.translator.to_canonical(&external, &self.registry_id))
            }
            other @ SourceRecord::Local(_) => Err(AdapterError::MismatchedRecord {
                registry_id: self.registry_id.clone(),
                found: other.shape(),
            }),
        }
    }

    fn get_registry_info(&self) -> RegistryDescriptor {
        snapshot(&self.descriptor)
    }

    async fn check_health(&self) -> RegistryDescriptor {
        let status = match timeout(self.timeout, self.client.ping()).await {
            Ok(Ok(())) => RegistryStatus::Active,
            Ok(Err(err)) => {
                warn!(registry = %self.registry_id, error = %err, "remote registry health check failed");
                RegistryStatus::Unreachable
            }
            Err(_) => {
                warn!(registry = %self.registry_id, reason = %self.timed_out(), "remote registry health check timed out");
                RegistryStatus::Unreachable
            }
        };
        record_health(&self.descriptor, status, self.clock.utc())
    }
}
