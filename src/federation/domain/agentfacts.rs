//! AgentFacts record shape.

use serde::{Deserialize, Serialize};

/// `source_schema` for records read back from AgentFacts.
pub const AGENTFACTS_SOURCE_SCHEMA: &str = "agentfacts";

/// Modality assumed when a record declares no capabilities.
pub const DEFAULT_MODALITY: &str = "text";

/// Version written when the record carries none.
pub const DEFAULT_AGENTFACTS_VERSION: &str = "1.0.0";

/// Provider URL written when none is configured.
pub const DEFAULT_PROVIDER_URL: &str = "https://example.com";

/// A self-describing AgentFacts record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentFactsRecord {
    /// Stable agent identifier.
    pub id: String,
    /// Mirrors `id`.
    pub agent_name: String,
    /// Display name.
    pub label: String,
    /// Free-text description.
    pub description: String,
    /// Agent version.
    pub version: String,
    /// Publishing organisation.
    pub provider: Provider,
    /// Reachable endpoints.
    pub endpoints: Endpoints,
    /// Declared modalities and authentication.
    pub capabilities: AgentFactsCapabilities,
    /// Skills, mapped onto the taxonomy where possible.
    pub skills: Vec<AgentFactsSkill>,
}

/// Publishing organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    /// Organisation name.
    pub name: String,
    /// Organisation URL.
    pub url: String,
}

/// Endpoint block; only static endpoints are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Fixed endpoint URLs.
    #[serde(rename = "static")]
    pub static_urls: Vec<String>,
}

/// Capability block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentFactsCapabilities {
    /// Capability names as declared by the agent.
    pub modalities: Vec<String>,
    /// Accepted authentication methods.
    pub authentication: Authentication,
}

/// Authentication methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Authentication {
    /// Method names, e.g. `none`.
    pub methods: Vec<String>,
}

/// One AgentFacts skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentFactsSkill {
    /// Taxonomy skill id, or `skill:<capability>` when unmapped.
    pub id: String,
    /// Human-readable provenance.
    pub description: String,
    /// Accepted input modes.
    pub input_modes: Vec<String>,
    /// Produced output modes.
    pub output_modes: Vec<String>,
}
