//! Switchboard: cross-registry agent resolution and schema translation.
//!
//! This crate resolves agent identifiers across a local registry and any
//! number of external registries, translates records between the local
//! canonical shape and the OASF shape, and maps free-form capability
//! strings onto a shared skill taxonomy.
//!
//! # Architecture
//!
//! Switchboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for registries and storage
//! - **Adapters**: Concrete implementations of ports (local store, remote
//!   registries, schema directories)
//!
//! # Modules
//!
//! - [`taxonomy`]: Skill taxonomy loading and capability mapping
//! - [`federation`]: Registry adapters, schema translation, and routing
//! - [`validation`]: Batch-path record validation and import
//! - [`config`]: Layered configuration
//! - [`logging`]: Tracing subscriber setup
//! - [`switchboard`]: Composition root

pub mod config;
pub mod federation;
pub mod logging;
pub mod switchboard;
pub mod taxonomy;
pub mod validation;

pub use switchboard::{ImportError, RegistryClients, Switchboard, SwitchboardError};
