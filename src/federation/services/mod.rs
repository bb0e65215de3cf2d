//! Translation and routing services.

mod agentfacts;
mod router;
mod translator;

pub use agentfacts::AgentFactsTranslator;
pub use router::{Router, RouterError};
pub use translator::{
    DEFAULT_AGENT_LOCATOR_TYPES, DEFAULT_API_LOCATOR_TYPES, DEFAULT_EXPORT_VERSION,
    DEFAULT_OASF_SCHEMA_VERSION, LocatorPolicy, SchemaTranslator,
};
