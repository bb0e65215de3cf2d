//! Extraction of local registry fields from external records.

use crate::federation::domain::{
    CanonicalRecord, ExternalRecord, Locator, NANDA_SCHEMA_VERSION, OASF_SOURCE_SCHEMA,
    RegistryId,
};
use crate::taxonomy::domain::Capability;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const UNNAMED_AGENT: &str = "unnamed";
const DEFAULT_IMPORT_VERSION: &str = "v0";
const PREFERRED_AGENT_LOCATOR: &str = "docker-image";
const PLACEHOLDER_SCHEME: &str = "placeholder://";

/// Local registry fields derived from one external record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedAgent {
    /// `name:version` with `/` replaced by `-`.
    pub agent_id: String,
    /// Agent name, `unnamed` when absent.
    pub agent_name: String,
    /// Agent version, `v0` when absent.
    pub version: String,
    /// Free-text description.
    pub description: String,
    /// First `docker-image` locator, else the first locator, else a
    /// `placeholder://` URL.
    pub agent_url: String,
    /// `cmd://` descriptor of the first MCP runtime server, if any.
    pub api_url: Option<String>,
    /// Final path segments of the declared skills.
    pub capabilities: Vec<String>,
    /// Creation timestamp from the record.
    pub last_updated: String,
}

impl ImportedAgent {
    /// Derives the import fields from `record`.
    #[must_use]
    pub fn from_record(record: &ExternalRecord) -> Self {
        let agent_name = non_empty_or(&record.name, UNNAMED_AGENT);
        let version = non_empty_or(&record.version, DEFAULT_IMPORT_VERSION);
        let agent_id = format!("{agent_name}:{version}").replace('/', "-");
        let agent_url = locator_url(&record.locators)
            .unwrap_or_else(|| format!("{PLACEHOLDER_SCHEME}{agent_id}"));
        let api_url = record
            .extensions
            .iter()
            .filter(|extension| extension.is_mcp_runtime())
            .find_map(|extension| command_url(&extension.data));
        let capabilities = record
            .skills
            .iter()
            .map(|skill| skill.leaf_name().to_owned())
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            agent_id,
            agent_name,
            version,
            description: record.description.clone(),
            agent_url,
            api_url,
            capabilities,
            last_updated: record.created_at.clone(),
        }
    }

    /// Converts the import into a record for the local store.
    ///
    /// Capabilities stay free-form; mapping happens on export.
    #[must_use]
    pub fn into_record(self, registry_id: &RegistryId) -> CanonicalRecord {
        CanonicalRecord {
            agent_id: self.agent_id,
            registry_id: registry_id.to_string(),
            agent_name: self.agent_name,
            version: self.version,
            description: self.description,
            capabilities: self.capabilities.into_iter().map(Capability::Text).collect(),
            agent_url: self.agent_url,
            api_url: self.api_url.unwrap_or_default(),
            last_updated: self.last_updated,
            schema_version: NANDA_SCHEMA_VERSION.to_owned(),
            source_schema: OASF_SOURCE_SCHEMA.to_owned(),
            oasf_schema_version: None,
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn locator_url(locators: &[Locator]) -> Option<String> {
    locators
        .iter()
        .find(|locator| locator.kind == PREFERRED_AGENT_LOCATOR)
        .or_else(|| locators.first())
        .map(|locator| locator.url.clone())
        .filter(|url| !url.is_empty())
}

fn command_url(data: &Value) -> Option<String> {
    let servers = data.get("servers")?.as_object()?;
    servers.values().find_map(|server| {
        let command = server
            .get("command")
            .and_then(Value::as_str)
            .filter(|command| !command.is_empty())?;
        let args: Vec<&str> = server
            .get("args")
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        Some(format!("cmd://{command}?args={}", args.join(" ")))
    })
}
