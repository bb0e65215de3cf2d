//! Agent identifier grammar.
//!
//! `@<registry>:<name>` names an agent in a specific registry; anything
//! without a leading `@` is a local lookup key used verbatim.

use super::IdentifierError;
use std::fmt;

/// A parsed agent identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AgentIdentifier {
    /// Local lookup key, used verbatim.
    Local(String),
    /// An agent hosted by a named registry.
    Qualified {
        /// Lowercased registry prefix, not yet checked against configuration.
        registry: String,
        /// Agent name within the registry.
        name: String,
    },
}

impl AgentIdentifier {
    /// Parses an identifier string.
    ///
    /// Qualified identifiers split at the first `:` after the `@`, so agent
    /// names may themselves contain colons.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::Empty`] for blank input,
    /// [`IdentifierError::MalformedPrefix`] when `@` is not followed by
    /// `<registry>:`, or [`IdentifierError::MissingName`] when the name part
    /// is empty.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let Some(qualified) = trimmed.strip_prefix('@') else {
            return Ok(Self::Local(trimmed.to_owned()));
        };

        let Some((registry, name)) = qualified.split_once(':') else {
            return Err(IdentifierError::MalformedPrefix(trimmed.to_owned()));
        };

        let registry_key = registry.trim().to_ascii_lowercase();
        if registry_key.is_empty() {
            return Err(IdentifierError::MalformedPrefix(trimmed.to_owned()));
        }

        let agent_name = name.trim();
        if agent_name.is_empty() {
            return Err(IdentifierError::MissingName(trimmed.to_owned()));
        }

        Ok(Self::Qualified {
            registry: registry_key,
            name: agent_name.to_owned(),
        })
    }

    /// Returns the agent name or local key.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Local(key) => key,
            Self::Qualified { name, .. } => name,
        }
    }

    /// Returns the registry prefix for qualified identifiers.
    #[must_use]
    pub fn registry(&self) -> Option<&str> {
        match self {
            Self::Local(_) => None,
            Self::Qualified { registry, .. } => Some(registry),
        }
    }
}

impl fmt::Display for AgentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(key) => f.write_str(key),
            Self::Qualified { registry, name } => write!(f, "@{registry}:{name}"),
        }
    }
}
