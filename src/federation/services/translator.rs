//! Bidirectional OASF ⇄ canonical record translation.
//!
//! Both directions are pure: the same input always yields the same output.

use crate::federation::domain::{
    CanonicalRecord, Extension, ExternalRecord, ExternalSkill, Locator, MCP_EXTENSION_NAME,
    MCP_EXTENSION_VERSION, NANDA_SCHEMA_VERSION, OASF_SOURCE_SCHEMA, RegistryId,
};
use crate::taxonomy::{domain::Capability, services::SkillMapper};
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use std::sync::Arc;

/// Default locator types treated as the agent URL, in priority order.
pub const DEFAULT_AGENT_LOCATOR_TYPES: &[&str] = &["source_code", "docker-image", "bridge-url"];

/// Default locator types treated as the API URL, in priority order.
pub const DEFAULT_API_LOCATOR_TYPES: &[&str] = &["api", "api-url"];

/// OASF schema version written when the record does not carry one.
pub const DEFAULT_OASF_SCHEMA_VERSION: &str = "1.0.0";

/// Version written when an identifier carries none.
pub const DEFAULT_EXPORT_VERSION: &str = "v0";

const EXPORT_AGENT_LOCATOR: &str = "bridge-url";
const EXPORT_API_LOCATOR: &str = "api-url";
const COMMAND_SCHEME: &str = "cmd://";
const COMMAND_ARGS_MARKER: &str = "?args=";
const EXPORT_SERVER_NAME: &str = "nanda-export";

/// Which locator types fill `agent_url` and `api_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorPolicy {
    agent_url_types: Vec<String>,
    api_url_types: Vec<String>,
}

impl LocatorPolicy {
    /// Creates a policy from priority-ordered type lists.
    #[must_use]
    pub fn new(
        agent_url_types: impl IntoIterator<Item = String>,
        api_url_types: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            agent_url_types: agent_url_types.into_iter().collect(),
            api_url_types: api_url_types.into_iter().collect(),
        }
    }

    /// Returns the URL of the best agent locator, or `""`.
    #[must_use]
    pub fn agent_url<'a>(&self, locators: &'a [Locator]) -> &'a str {
        first_by_priority(&self.agent_url_types, locators)
    }

    /// Returns the URL of the best API locator, or `""`.
    #[must_use]
    pub fn api_url<'a>(&self, locators: &'a [Locator]) -> &'a str {
        first_by_priority(&self.api_url_types, locators)
    }
}

impl Default for LocatorPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_AGENT_LOCATOR_TYPES.iter().map(|kind| (*kind).to_owned()),
            DEFAULT_API_LOCATOR_TYPES.iter().map(|kind| (*kind).to_owned()),
        )
    }
}

fn first_by_priority<'a>(types: &[String], locators: &'a [Locator]) -> &'a str {
    types
        .iter()
        .find_map(|kind| {
            locators
                .iter()
                .find(|locator| &locator.kind == kind && !locator.url.is_empty())
        })
        .map_or("", |locator| locator.url.as_str())
}

/// Converts records between the OASF and canonical shapes.
#[derive(Debug, Clone)]
pub struct SchemaTranslator {
    mapper: Arc<SkillMapper>,
    locators: LocatorPolicy,
}

impl SchemaTranslator {
    /// Creates a translator with the default locator policy.
    #[must_use]
    pub fn new(mapper: Arc<SkillMapper>) -> Self {
        Self::with_locator_policy(mapper, LocatorPolicy::default())
    }

    /// Creates a translator with an explicit locator policy.
    #[must_use]
    pub const fn with_locator_policy(mapper: Arc<SkillMapper>, locators: LocatorPolicy) -> Self {
        Self { mapper, locators }
    }

    /// Returns the skill mapper.
    #[must_use]
    pub fn mapper(&self) -> &SkillMapper {
        &self.mapper
    }

    /// Translates an external record into the canonical shape.
    ///
    /// Mapped skills are deduplicated by skill; unmapped ones are kept as
    /// plain strings.
    #[must_use]
    pub fn to_canonical(&self, external: &ExternalRecord, registry_id: &RegistryId) -> CanonicalRecord {
        CanonicalRecord {
            agent_id: CanonicalRecord::qualified_id(registry_id, &external.name),
            registry_id: String::from(registry_id),
            agent_name: external.name.clone(),
            version: external.version.clone(),
            description: external.description.clone(),
            capabilities: self.import_capabilities(&external.skills),
            agent_url: self.locators.agent_url(&external.locators).to_owned(),
            api_url: self.locators.api_url(&external.locators).to_owned(),
            last_updated: external.created_at.clone(),
            schema_version: NANDA_SCHEMA_VERSION.to_owned(),
            source_schema: OASF_SOURCE_SCHEMA.to_owned(),
            oasf_schema_version: Some(external.schema_version.clone())
                .filter(|version| !version.is_empty()),
        }
    }

    fn import_capabilities(&self, skills: &[ExternalSkill]) -> Vec<Capability> {
        let mut seen = HashSet::new();
        skills
            .iter()
            .map(ExternalSkill::leaf_name)
            .filter(|leaf| !leaf.is_empty())
            .filter_map(|leaf| match self.mapper.map(leaf) {
                Some(mapping) => seen
                    .insert(mapping.skill_id.clone())
                    .then_some(Capability::Mapped(mapping)),
                None => Some(Capability::Text(leaf.to_owned())),
            })
            .collect()
    }

    /// Translates a canonical record into the OASF shape.
    ///
    /// Capabilities without a taxonomy mapping are folded into the
    /// description. A `cmd://` API URL becomes an MCP runtime extension.
    #[must_use]
    pub fn to_external(&self, canonical: &CanonicalRecord) -> ExternalRecord {
        let (id_name, id_version) = split_agent_id(&canonical.agent_id);
        let name = non_empty(&canonical.agent_name).unwrap_or(id_name).to_owned();
        let version = non_empty(&canonical.version)
            .or(id_version)
            .unwrap_or(DEFAULT_EXPORT_VERSION)
            .to_owned();

        let (skills, unmapped) = self.export_capabilities(&canonical.capabilities);

        let mut locators = Vec::new();
        if !canonical.agent_url.is_empty() {
            locators.push(Locator::new(EXPORT_AGENT_LOCATOR, canonical.agent_url.clone()));
        }
        let mut extensions = Vec::new();
        match command_extension(&canonical.api_url) {
            Some(extension) => extensions.push(extension),
            None if !canonical.api_url.is_empty() => {
                locators.push(Locator::new(EXPORT_API_LOCATOR, canonical.api_url.clone()));
            }
            None => {}
        }

        ExternalRecord {
            name,
            version,
            description: describe(&canonical.description, &unmapped),
            schema_version: canonical
                .oasf_schema_version
                .clone()
                .filter(|version| !version.is_empty())
                .unwrap_or_else(|| DEFAULT_OASF_SCHEMA_VERSION.to_owned()),
            skills,
            authors: Vec::new(),
            created_at: canonical.last_updated.clone(),
            locators,
            extensions,
        }
    }

    fn export_capabilities<'a>(
        &self,
        capabilities: &'a [Capability],
    ) -> (Vec<ExternalSkill>, Vec<&'a str>) {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();
        let mut unmapped = Vec::new();

        for capability in capabilities {
            let mapping = match capability {
                Capability::Mapped(mapping) => Some(mapping.clone()),
                Capability::Text(text) => self.mapper.map(text),
            };
            match mapping {
                Some(found) => {
                    if seen.insert(found.skill_id.clone()) {
                        skills.push(ExternalSkill {
                            id: found.class_uid,
                            name: found.skill_id,
                        });
                    }
                }
                None => unmapped.push(capability.label()),
            }
        }
        (skills, unmapped)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|trimmed| !trimmed.is_empty())
}

/// Splits `[@registry:]name[:version]` into name and optional version.
fn split_agent_id(agent_id: &str) -> (&str, Option<&str>) {
    let unqualified = agent_id
        .strip_prefix('@')
        .and_then(|rest| rest.split_once(':'))
        .map_or(agent_id, |(_, rest)| rest);

    match unqualified.rsplit_once(':') {
        Some((name, version)) if !version.is_empty() => (name, Some(version)),
        Some((name, _)) => (name, None),
        None => (unqualified, None),
    }
}

fn describe(description: &str, unmapped: &[&str]) -> String {
    if unmapped.is_empty() {
        return description.to_owned();
    }
    let listing = format!("Capabilities: {}", unmapped.join(", "));
    if description.trim().is_empty() {
        listing
    } else {
        format!("{description} {listing}")
    }
}

fn command_extension(api_url: &str) -> Option<Extension> {
    let target = api_url.strip_prefix(COMMAND_SCHEME)?;
    let (command, args) = match target.split_once(COMMAND_ARGS_MARKER) {
        Some((command, raw_args)) => (
            command,
            raw_args.split_whitespace().map(ToOwned::to_owned).collect(),
        ),
        None => (target, Vec::<String>::new()),
    };

    let mut servers = Map::new();
    servers.insert(
        EXPORT_SERVER_NAME.to_owned(),
        json!({ "command": command, "args": args, "env": {} }),
    );

    Some(Extension {
        name: MCP_EXTENSION_NAME.to_owned(),
        version: MCP_EXTENSION_VERSION.to_owned(),
        data: json!({ "servers": Value::Object(servers) }),
    })
}
