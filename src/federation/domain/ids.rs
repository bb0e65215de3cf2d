//! Registry identifiers and the `@registry:name` qualifier built from them.

use super::FederationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_REGISTRY_ID_LENGTH: usize = 64;
const QUALIFIER_SIGIL: char = '@';
const QUALIFIER_SEPARATOR: char = ':';

/// Key under which a registry adapter is routed, e.g. `nanda` or `agntcy`.
///
/// Always lowercase, so `@AGNTCY:x` and `@agntcy:x` reach the same adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryId(String);

impl RegistryId {
    /// Parses a routing key from configuration or an identifier prefix.
    ///
    /// Surrounding whitespace is dropped and ASCII letters are folded to
    /// lowercase. The result may use `[a-z0-9_-]`, which keeps it free of the
    /// `@` and `:` qualifier delimiters.
    ///
    /// # Errors
    ///
    /// [`FederationDomainError::EmptyRegistryId`] for blank input,
    /// [`FederationDomainError::RegistryIdTooLong`] above 64 bytes, and
    /// [`FederationDomainError::InvalidRegistryId`] for any other character.
    pub fn new(value: impl Into<String>) -> Result<Self, FederationDomainError> {
        let raw = value.into();
        let key = raw.trim().to_ascii_lowercase();

        match key.len() {
            0 => Err(FederationDomainError::EmptyRegistryId),
            len if len > MAX_REGISTRY_ID_LENGTH => Err(FederationDomainError::RegistryIdTooLong(raw)),
            _ if !key.chars().all(is_routing_char) => {
                Err(FederationDomainError::InvalidRegistryId(raw))
            }
            _ => Ok(Self(key)),
        }
    }

    /// Returns the routing key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the qualified `@registry:name` identifier for `agent_name`.
    ///
    /// ```
    /// use switchboard::federation::domain::RegistryId;
    ///
    /// let agntcy = RegistryId::new("AGNTCY").expect("valid registry id");
    /// assert_eq!(agntcy.qualify("helper-agent"), "@agntcy:helper-agent");
    /// ```
    #[must_use]
    pub fn qualify(&self, agent_name: &str) -> String {
        format!("{QUALIFIER_SIGIL}{}{QUALIFIER_SEPARATOR}{agent_name}", self.0)
    }
}

const fn is_routing_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_' | '-')
}

impl AsRef<str> for RegistryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RegistryId {
    type Error = FederationDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RegistryId {
    type Error = FederationDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegistryId> for String {
    fn from(value: RegistryId) -> Self {
        value.0
    }
}

impl From<&RegistryId> for String {
    fn from(value: &RegistryId) -> Self {
        value.0.clone()
    }
}
