//! Port contracts for registry adapters and their collaborators.

mod adapter;
mod client;
mod store;

pub use adapter::{AdapterError, AdapterResult, RegistryAdapter};
pub use client::{RegistryClient, RegistryClientError, RegistryClientResult};
pub use store::{AgentStore, AgentStoreError, AgentStoreResult};
