//! Domain model for the skill taxonomy.
//!
//! Nodes are immutable once the taxonomy is built. The [`TaxonomyStore`]
//! sum type makes the degraded mode (no schema directory) explicit so every
//! consumer handles both cases.

mod error;
mod mapping;
mod name;
mod node;
mod store;

pub use error::TaxonomyLoadError;
pub use mapping::{Capability, CapabilityMapping};
pub use name::normalize_name;
pub use node::{NodeKind, TaxonomyNode};
pub use store::{Taxonomy, TaxonomyStore, TaxonomyUnavailable};
