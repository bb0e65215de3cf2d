//! Cross-registry agent resolution.
//!
//! Adapters give every registry the same capability set: query a raw
//! record, translate it into the canonical shape, and report a descriptor.
//! The router picks an adapter from the identifier prefix. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Translation and routing in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
