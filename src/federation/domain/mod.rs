//! Domain model for cross-registry agent resolution.
//!
//! Records come in two main shapes: the canonical local record every
//! adapter produces and the OASF-style external record hosted by foreign
//! registries. AgentFacts records are a third shape used for publishing.
//! Identifiers and registry descriptors are validated on construction.

mod agentfacts;
mod descriptor;
mod error;
mod external;
mod identifier;
mod ids;
mod record;

pub use agentfacts::{
    AGENTFACTS_SOURCE_SCHEMA, AgentFactsCapabilities, AgentFactsRecord, AgentFactsSkill,
    Authentication, DEFAULT_AGENTFACTS_VERSION, DEFAULT_MODALITY, DEFAULT_PROVIDER_URL, Endpoints,
    Provider,
};
pub use descriptor::{AdapterKind, RegistryDescriptor, RegistryStatus};
pub use error::{FederationDomainError, IdentifierError, ParseRegistryStatusError};
pub use external::{
    ExternalRecord, ExternalSkill, Extension, Locator, MCP_EXTENSION_NAME, MCP_EXTENSION_VERSION,
};
pub use identifier::AgentIdentifier;
pub use ids::RegistryId;
pub use record::{
    CanonicalRecord, NANDA_SCHEMA_VERSION, NANDA_SOURCE_SCHEMA, OASF_SOURCE_SCHEMA, SourceRecord,
};
