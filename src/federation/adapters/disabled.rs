//! Placeholder adapter for registries switched off in configuration.

use crate::federation::{
    domain::{CanonicalRecord, RegistryDescriptor, RegistryId, RegistryStatus, SourceRecord},
    ports::{AdapterError, AdapterResult, RegistryAdapter},
};
use async_trait::async_trait;

const DISABLED_REASON: &str = "registry is disabled";

/// Lists a configured-but-disabled registry and rejects every lookup.
#[derive(Debug, Clone)]
pub struct DisabledAdapter {
    registry_id: RegistryId,
    descriptor: RegistryDescriptor,
}

impl DisabledAdapter {
    /// Wraps `descriptor`, forcing its status to disabled.
    #[must_use]
    pub fn new(descriptor: RegistryDescriptor) -> Self {
        Self {
            registry_id: descriptor.registry_id().clone(),
            descriptor: descriptor.with_status(RegistryStatus::Disabled),
        }
    }
}

#[async_trait]
impl RegistryAdapter for DisabledAdapter {
    fn registry_id(&self) -> &RegistryId {
        &self.registry_id
    }

    async fn query_agent(&self, _name: &str) -> AdapterResult<SourceRecord> {
        Err(AdapterError::unavailable(&self.registry_id, DISABLED_REASON))
    }

    fn translate_to_nanda(&self, _record: SourceRecord) -> AdapterResult<CanonicalRecord> {
        Err(AdapterError::unavailable(&self.registry_id, DISABLED_REASON))
    }

    fn get_registry_info(&self) -> RegistryDescriptor {
        self.descriptor.clone()
    }

    async fn check_health(&self) -> RegistryDescriptor {
        self.descriptor.clone()
    }
}
