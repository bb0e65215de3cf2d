//! Skill taxonomy loading and capability mapping.
//!
//! The taxonomy is a read-only hierarchy of categories, classes, and leaf
//! skills built once from an OASF-style schema directory. The skill mapper
//! resolves free-form capability strings against it. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Schema directory loading in [`adapters`]
//! - Capability resolution in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
