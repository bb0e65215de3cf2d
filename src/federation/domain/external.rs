//! OASF-style external agent records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extension name of the OASF MCP runtime feature.
pub const MCP_EXTENSION_NAME: &str = "schema.oasf.agntcy.org/features/runtime/mcp";

/// Extension version written on export.
pub const MCP_EXTENSION_VERSION: &str = "v1.0.0";

/// An agent descriptor in the OASF shape.
///
/// Owned by the external registry; translation only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalRecord {
    /// Agent name.
    pub name: String,
    /// Agent version.
    pub version: String,
    /// Free-text description.
    pub description: String,
    /// OASF schema version the record was written against.
    pub schema_version: String,
    /// Declared skills.
    pub skills: Vec<ExternalSkill>,
    /// Record authors.
    pub authors: Vec<String>,
    /// Creation timestamp as published by the registry.
    pub created_at: String,
    /// Where the agent can be fetched or reached.
    pub locators: Vec<Locator>,
    /// Feature extensions.
    pub extensions: Vec<Extension>,
}

/// A skill entry; `name` is a `/`-delimited taxonomy path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalSkill {
    /// Skill class identifier.
    pub id: u64,
    /// Hierarchical skill name, e.g. `images_computer_vision/image_segmentation`.
    pub name: String,
}

impl ExternalSkill {
    /// Returns the final path segment of the skill name.
    #[must_use]
    pub fn leaf_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default().trim()
    }
}

/// A typed URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locator {
    /// Locator type, e.g. `source_code` or `docker-image`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Target URL.
    pub url: String,
}

impl Locator {
    /// Creates a locator.
    #[must_use]
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
        }
    }
}

/// A named, versioned extension payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    /// Extension schema name.
    pub name: String,
    /// Extension version.
    pub version: String,
    /// Free-form payload.
    pub data: Value,
}

impl Extension {
    /// Returns `true` for the MCP runtime extension.
    #[must_use]
    pub fn is_mcp_runtime(&self) -> bool {
        self.name == MCP_EXTENSION_NAME || self.name.ends_with("/runtime/mcp")
    }
}
