//! Error types for federation domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing federation domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FederationDomainError {
    /// The registry identifier is empty after trimming.
    #[error("registry identifier must not be empty")]
    EmptyRegistryId,

    /// The registry identifier contains characters outside `[a-z0-9_-]`.
    #[error(
        "registry identifier '{0}' contains invalid characters (only lowercase alphanumeric, hyphens and underscores allowed)"
    )]
    InvalidRegistryId(String),

    /// The registry identifier exceeds the length limit.
    #[error("registry identifier exceeds 64 character limit: {0}")]
    RegistryIdTooLong(String),
}

/// Errors returned while parsing an agent identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier is empty after trimming.
    #[error("agent identifier must not be empty")]
    Empty,

    /// A qualified identifier has no agent name after the registry prefix.
    #[error("agent identifier '{0}' has no agent name")]
    MissingName(String),

    /// The `@` prefix is not followed by `<registry>:`.
    #[error("agent identifier '{0}' has a malformed registry prefix")]
    MalformedPrefix(String),
}

/// Error returned while parsing a registry status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown registry status: {0}")]
pub struct ParseRegistryStatusError(pub String);
