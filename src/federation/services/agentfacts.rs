//! Canonical ⇄ AgentFacts conversion.
//!
//! Export maps capabilities through the skill taxonomy and falls back to
//! `skill:<capability>` placeholders. Import is lossy: provider, skills and
//! authentication are dropped.

use crate::federation::domain::{
    AGENTFACTS_SOURCE_SCHEMA, AgentFactsCapabilities, AgentFactsRecord, AgentFactsSkill,
    Authentication, CanonicalRecord, DEFAULT_AGENTFACTS_VERSION, DEFAULT_MODALITY,
    DEFAULT_PROVIDER_URL, Endpoints, NANDA_SCHEMA_VERSION, Provider, RegistryId,
};
use crate::taxonomy::{domain::Capability, services::SkillMapper};
use std::collections::HashSet;
use std::sync::Arc;

const PLACEHOLDER_PREFIX: &str = "skill:";
const DEFAULT_AUTH_METHOD: &str = "none";

/// Converts canonical records to and from AgentFacts.
#[derive(Debug, Clone)]
pub struct AgentFactsTranslator {
    mapper: Arc<SkillMapper>,
    provider: Option<Provider>,
}

impl AgentFactsTranslator {
    /// Creates a translator that names each agent as its own provider.
    #[must_use]
    pub const fn new(mapper: Arc<SkillMapper>) -> Self {
        Self {
            mapper,
            provider: None,
        }
    }

    /// Uses `provider` for every exported record.
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Builds the AgentFacts record for `record`.
    #[must_use]
    pub fn to_agentfacts(&self, record: &CanonicalRecord) -> AgentFactsRecord {
        let id = first_non_empty([record.agent_id.as_str(), record.agent_name.as_str()]);
        let label = first_non_empty([record.agent_name.as_str(), id.as_str()]);

        let mut modalities: Vec<String> = record
            .capabilities
            .iter()
            .map(Capability::label)
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        if modalities.is_empty() {
            modalities.push(DEFAULT_MODALITY.to_owned());
        }

        let provider = self.provider.clone().unwrap_or_else(|| Provider {
            name: label.clone(),
            url: DEFAULT_PROVIDER_URL.to_owned(),
        });

        AgentFactsRecord {
            agent_name: id.clone(),
            skills: self.skills_for(&modalities),
            id,
            label,
            description: record.description.clone(),
            version: first_non_empty([record.version.as_str(), DEFAULT_AGENTFACTS_VERSION]),
            provider,
            endpoints: Endpoints {
                static_urls: [&record.agent_url, &record.api_url]
                    .into_iter()
                    .filter(|url| !url.is_empty())
                    .cloned()
                    .collect(),
            },
            capabilities: AgentFactsCapabilities {
                modalities,
                authentication: Authentication {
                    methods: vec![DEFAULT_AUTH_METHOD.to_owned()],
                },
            },
        }
    }

    /// Flattens an AgentFacts record into a canonical record for
    /// `registry_id`.
    ///
    /// The first static endpoint becomes `agent_url` and the second
    /// `api_url`; modalities become free-text capabilities.
    #[must_use]
    pub fn to_canonical(&self, facts: &AgentFactsRecord, registry_id: &RegistryId) -> CanonicalRecord {
        let agent_id = first_non_empty([facts.id.as_str(), facts.agent_name.as_str()]);
        let mut endpoints = facts.endpoints.static_urls.iter().cloned();
        CanonicalRecord {
            agent_name: first_non_empty([facts.label.as_str(), agent_id.as_str()]),
            agent_id,
            registry_id: String::from(registry_id),
            version: first_non_empty([facts.version.as_str(), DEFAULT_AGENTFACTS_VERSION]),
            description: facts.description.clone(),
            capabilities: facts
                .capabilities
                .modalities
                .iter()
                .map(|modality| Capability::Text(modality.clone()))
                .collect(),
            agent_url: endpoints.next().unwrap_or_default(),
            api_url: endpoints.next().unwrap_or_default(),
            schema_version: NANDA_SCHEMA_VERSION.to_owned(),
            source_schema: AGENTFACTS_SOURCE_SCHEMA.to_owned(),
            ..CanonicalRecord::default()
        }
    }

    fn skills_for(&self, modalities: &[String]) -> Vec<AgentFactsSkill> {
        let mut seen = HashSet::new();
        let mapped: Vec<AgentFactsSkill> = modalities
            .iter()
            .filter_map(|modality| self.mapper.map(modality).map(|mapping| (modality, mapping)))
            .filter(|(_, mapping)| seen.insert(mapping.skill_id.clone()))
            .map(|(modality, mapping)| AgentFactsSkill {
                description: format!(
                    "Skill mapped from capability '{modality}' (class: {})",
                    mapping.class_name
                ),
                id: mapping.skill_id,
                ..text_modes()
            })
            .collect();
        if !mapped.is_empty() {
            return mapped;
        }

        modalities
            .iter()
            .map(|modality| AgentFactsSkill {
                id: format!("{PLACEHOLDER_PREFIX}{modality}"),
                description: format!("Capability skill for {modality}"),
                ..text_modes()
            })
            .collect()
    }
}

fn text_modes() -> AgentFactsSkill {
    AgentFactsSkill {
        input_modes: vec![DEFAULT_MODALITY.to_owned()],
        output_modes: vec![DEFAULT_MODALITY.to_owned()],
        ..AgentFactsSkill::default()
    }
}

fn first_non_empty<const N: usize>(candidates: [&str; N]) -> String {
    candidates
        .into_iter()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_owned()
}
