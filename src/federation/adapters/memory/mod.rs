//! In-memory collaborators for tests and local composition.

mod agent_store;
mod registry_client;

pub use agent_store::InMemoryAgentStore;
pub use registry_client::InMemoryRegistryClient;
