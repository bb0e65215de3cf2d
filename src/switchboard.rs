//! Composition root wiring taxonomy, adapters, router, and validator.

use crate::config::SwitchboardConfig;
use crate::federation::{
    adapters::{DisabledAdapter, LocalAdapter, RemoteAdapter},
    domain::{
        AdapterKind, AgentFactsRecord, CanonicalRecord, ExternalRecord, FederationDomainError, RegistryDescriptor,
        RegistryId,
    },
    ports::{AgentStore, RegistryAdapter, RegistryClient},
    services::{AgentFactsTranslator, LocatorPolicy, Router, RouterError, SchemaTranslator},
};
use crate::taxonomy::{adapters::SchemaDirectory, domain::CapabilityMapping, services::SkillMapper};
use crate::validation::{ImportedAgent, RecordValidator, ValidationReport};
use mockable::Clock;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while assembling a [`Switchboard`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SwitchboardError {
    /// A configured registry identifier is invalid.
    #[error("invalid registry identifier '{value}': {source}")]
    InvalidRegistryId {
        /// Configured value.
        value: String,
        /// Validation failure.
        source: FederationDomainError,
    },

    /// An enabled remote registry has no connected client.
    #[error("no client supplied for enabled registry {0}")]
    MissingClient(RegistryId),

    /// The adapter map could not be built.
    #[error(transparent)]
    Router(#[from] RouterError),
}

/// Errors raised by the batch import path.
#[derive(Debug, Clone, Error)]
pub enum ImportError {
    /// The record failed validation.
    #[error("record failed validation: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// The record passed validation but does not deserialize.
    #[error("record could not be decoded: {0}")]
    Malformed(Arc<serde_json::Error>),
}

/// Connected clients for remote registries, keyed by registry identifier.
pub type RegistryClients = BTreeMap<RegistryId, Arc<dyn RegistryClient>>;

/// The assembled resolution and translation engine.
///
/// Built once at startup; every part is read-only afterwards and cheap to
/// share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Switchboard {
    mapper: Arc<SkillMapper>,
    translator: SchemaTranslator,
    agentfacts: AgentFactsTranslator,
    router: Router,
    validator: RecordValidator,
}

impl Switchboard {
    /// Builds the engine from configuration.
    ///
    /// A missing or unreadable taxonomy degrades capability mapping instead
    /// of failing. Disabled registries are listed but reject lookups.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchboardError`] when a registry identifier is invalid or
    /// duplicated, or when an enabled remote registry has no client.
    pub fn from_config<S, C>(
        config: &SwitchboardConfig,
        store: Arc<S>,
        clients: &RegistryClients,
        clock: &Arc<C>,
    ) -> Result<Self, SwitchboardError>
    where
        S: AgentStore + ?Sized + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let taxonomy = SchemaDirectory::load_store(config.taxonomy.schema_dir.as_deref());
        let mapper = Arc::new(SkillMapper::new(Arc::new(taxonomy)));

        let local_id = registry_id(&config.local.registry_id)?;
        let local: Arc<dyn RegistryAdapter> = if config.local.enabled {
            Arc::new(LocalAdapter::new(local_id, store, Arc::clone(clock)))
        } else {
            Arc::new(DisabledAdapter::new(RegistryDescriptor::new(
                local_id,
                AdapterKind::Local,
            )))
        };
        let mut router = Router::new(local);

        for remote in &config.registries {
            let id = registry_id(&remote.registry_id)?;
            let mut descriptor = RegistryDescriptor::new(id.clone(), AdapterKind::Remote);
            if let Some(endpoint) = &remote.endpoint {
                descriptor = descriptor.with_endpoint(endpoint.clone());
            }

            let adapter: Arc<dyn RegistryAdapter> = if remote.enabled {
                let client = clients
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| SwitchboardError::MissingClient(id.clone()))?;
                let translator = SchemaTranslator::with_locator_policy(
                    Arc::clone(&mapper),
                    LocatorPolicy::new(
                        remote.agent_locator_types.iter().cloned(),
                        remote.api_locator_types.iter().cloned(),
                    ),
                );
                Arc::new(
                    RemoteAdapter::new(descriptor, client, translator, Arc::clone(clock))
                        .with_timeout(Duration::from_millis(remote.timeout_ms)),
                )
            } else {
                Arc::new(DisabledAdapter::new(descriptor))
            };
            router = router.with_adapter(adapter)?;
        }

        for id in clients.keys() {
            if router.adapter(id).is_none() {
                warn!(registry = %id, "client supplied for unconfigured registry; ignoring");
            }
        }

        let validator = RecordValidator::new(config.validation.supported_schema_versions.clone());

        info!(
            local = %router.local_registry(),
            registries = router.list_registries().len(),
            skill_mapping = mapper.is_available(),
            "switchboard ready"
        );

        Ok(Self {
            translator: SchemaTranslator::new(Arc::clone(&mapper)),
            agentfacts: AgentFactsTranslator::new(Arc::clone(&mapper)),
            mapper,
            router,
            validator,
        })
    }

    /// Returns the router.
    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Returns the skill mapper.
    #[must_use]
    pub fn mapper(&self) -> &SkillMapper {
        &self.mapper
    }

    /// Returns the export translator, using the default locator policy.
    #[must_use]
    pub const fn translator(&self) -> &SchemaTranslator {
        &self.translator
    }

    /// Returns the AgentFacts translator.
    #[must_use]
    pub const fn agentfacts(&self) -> &AgentFactsTranslator {
        &self.agentfacts
    }

    /// Returns the batch validator.
    #[must_use]
    pub const fn validator(&self) -> &RecordValidator {
        &self.validator
    }

    /// Resolves an identifier through the router.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] as described on [`Router::resolve`].
    pub async fn resolve(&self, identifier: &str) -> Result<CanonicalRecord, RouterError> {
        self.router.resolve(identifier).await
    }

    /// Returns descriptors for every configured registry.
    #[must_use]
    pub fn list_registries(&self) -> Vec<RegistryDescriptor> {
        self.router.list_registries()
    }

    /// Health-checks every registry and returns the refreshed descriptors.
    pub async fn refresh_health(&self) -> Vec<RegistryDescriptor> {
        self.router.refresh_health().await
    }

    /// Maps one capability string.
    #[must_use]
    pub fn map_capability(&self, capability: &str) -> Option<CapabilityMapping> {
        self.mapper.map(capability)
    }

    /// Exports a canonical record in the OASF shape.
    #[must_use]
    pub fn export(&self, record: &CanonicalRecord) -> ExternalRecord {
        self.translator.to_external(record)
    }

    /// Exports a canonical record as AgentFacts.
    #[must_use]
    pub fn export_agentfacts(&self, record: &CanonicalRecord) -> AgentFactsRecord {
        self.agentfacts.to_agentfacts(record)
    }

    /// Validates a raw external record.
    #[must_use]
    pub fn validate(&self, record: &Value) -> ValidationReport {
        self.validator.validate(record)
    }

    /// Validates and decodes a raw external record for import.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Invalid`] with the validation messages, or
    /// [`ImportError::Malformed`] when the record does not decode.
    pub fn import(&self, raw: &Value) -> Result<ImportedAgent, ImportError> {
        let (ok, errors) = self.validator.validate(raw).into_parts();
        if !ok {
            return Err(ImportError::Invalid(errors));
        }
        let record = ExternalRecord::deserialize(raw)
            .map_err(|err| ImportError::Malformed(Arc::new(err)))?;
        Ok(ImportedAgent::from_record(&record))
    }
}

fn registry_id(value: &str) -> Result<RegistryId, SwitchboardError> {
    RegistryId::new(value).map_err(|source| SwitchboardError::InvalidRegistryId {
        value: value.to_owned(),
        source,
    })
}
