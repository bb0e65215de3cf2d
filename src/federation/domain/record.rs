//! Canonical agent records.

use super::{ExternalRecord, RegistryId};
use crate::taxonomy::domain::Capability;
use serde::{Deserialize, Serialize};

/// `schema_version` carried by every canonical record.
pub const NANDA_SCHEMA_VERSION: &str = "nanda-v1";

/// `source_schema` for records translated from OASF.
pub const OASF_SOURCE_SCHEMA: &str = "oasf";

/// `source_schema` for records served from the local store.
pub const NANDA_SOURCE_SCHEMA: &str = "nanda";

/// The canonical agent descriptor every adapter normalizes into.
///
/// `agent_id` is unique within `registry_id`. Records sourced from a remote
/// registry use `@{registry_id}:{agent_name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalRecord {
    /// Identifier unique within the registry.
    pub agent_id: String,
    /// Registry the record came from.
    pub registry_id: String,
    /// Agent name.
    pub agent_name: String,
    /// Agent version.
    pub version: String,
    /// Free-text description.
    pub description: String,
    /// Structured or free-form capabilities.
    pub capabilities: Vec<Capability>,
    /// Where the agent lives.
    pub agent_url: String,
    /// Where the agent is called.
    pub api_url: String,
    /// Last update timestamp as published by the source.
    pub last_updated: String,
    /// Canonical schema version, normally [`NANDA_SCHEMA_VERSION`].
    pub schema_version: String,
    /// Schema the record was translated from.
    pub source_schema: String,
    /// Original OASF schema version for translated records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oasf_schema_version: Option<String>,
}

impl CanonicalRecord {
    /// Returns the qualified identifier used for remote records.
    #[must_use]
    pub fn qualified_id(registry_id: &RegistryId, agent_name: &str) -> String {
        registry_id.qualify(agent_name)
    }
}

/// Raw record returned by an adapter before translation.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceRecord {
    /// A record from the local store, already canonical.
    Local(CanonicalRecord),
    /// A record from an external registry.
    External(ExternalRecord),
}

impl SourceRecord {
    /// Returns a short label for the record shape.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Local(_) => "canonical",
            Self::External(_) => "external",
        }
    }
}
