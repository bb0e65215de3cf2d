//! Structured capability mappings and the capability sum type.

use serde::{Deserialize, Serialize};

/// Structured counterpart of a free-form capability string.
///
/// Produced per query by the skill mapper and embedded into record
/// capability lists; never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityMapping {
    /// Leaf skill name.
    pub skill_id: String,
    /// Caption of the owning category (or its key when undeclared).
    pub category_name: String,
    /// Identifier of the owning category, `0` when undeclared.
    pub category_uid: u64,
    /// Caption of the skill class.
    pub class_name: String,
    /// Identifier of the skill class.
    pub class_uid: u64,
}

/// One entry of a record's capability list.
///
/// Serialized untagged, so JSON lists mix mapping objects and bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Capability {
    /// A capability resolved against the taxonomy.
    Mapped(CapabilityMapping),
    /// A capability with no taxonomy counterpart.
    Text(String),
}

impl Capability {
    /// Returns the taxonomy mapping, when resolved.
    #[must_use]
    pub const fn mapping(&self) -> Option<&CapabilityMapping> {
        match self {
            Self::Mapped(mapping) => Some(mapping),
            Self::Text(_) => None,
        }
    }

    /// Returns a label for the capability: the skill id or the raw text.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Mapped(mapping) => &mapping.skill_id,
            Self::Text(text) => text,
        }
    }
}

impl From<CapabilityMapping> for Capability {
    fn from(mapping: CapabilityMapping) -> Self {
        Self::Mapped(mapping)
    }
}

impl From<&str> for Capability {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}
