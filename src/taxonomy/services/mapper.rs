//! Capability string → taxonomy skill resolution.

use super::rules::FALLBACK_RULES;
use crate::taxonomy::domain::{
    CapabilityMapping, Taxonomy, TaxonomyNode, TaxonomyStore, normalize_name,
};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Resolution stage that produced a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStage {
    /// Normalized input equals a leaf skill name.
    Exact,
    /// Normalized input occurs in a leaf caption.
    Caption,
    /// A fallback rule fired.
    Heuristic,
    /// Input named a category or class; its first leaf was used.
    ParentInference,
}

impl MatchStage {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Caption => "caption",
            Self::Heuristic => "heuristic",
            Self::ParentInference => "parent_inference",
        }
    }
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mapping together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The structured mapping.
    pub mapping: CapabilityMapping,
    /// Stage that matched.
    pub stage: MatchStage,
}

/// Maps free-form capability strings onto taxonomy skills.
///
/// Cheap to clone; the taxonomy is shared.
#[derive(Debug, Clone)]
pub struct SkillMapper {
    store: Arc<TaxonomyStore>,
}

impl SkillMapper {
    /// Creates a mapper over a shared taxonomy store.
    #[must_use]
    pub const fn new(store: Arc<TaxonomyStore>) -> Self {
        Self { store }
    }

    /// Creates a mapper in degraded mode.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(Arc::new(TaxonomyStore::unavailable(reason)))
    }

    /// Returns `true` when a taxonomy is loaded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &TaxonomyStore {
        &self.store
    }

    /// Maps one capability, returning `None` when nothing matches.
    #[must_use]
    pub fn map(&self, capability: &str) -> Option<CapabilityMapping> {
        self.resolve(capability).map(|resolution| resolution.mapping)
    }

    /// Maps one capability and reports which stage matched.
    #[must_use]
    pub fn resolve(&self, capability: &str) -> Option<Resolution> {
        let taxonomy = self.store.taxonomy()?;
        let normalized = normalize_name(capability);
        if normalized.is_empty() {
            return None;
        }

        let (node, stage) = exact(taxonomy, &normalized)
            .map(|node| (node, MatchStage::Exact))
            .or_else(|| caption(taxonomy, &normalized).map(|node| (node, MatchStage::Caption)))
            .or_else(|| heuristic(taxonomy, &normalized).map(|node| (node, MatchStage::Heuristic)))
            .or_else(|| {
                parent_inference(taxonomy, &normalized)
                    .map(|node| (node, MatchStage::ParentInference))
            })?;

        trace!(capability, skill = node.name(), %stage, "capability mapped");
        Some(Resolution {
            mapping: taxonomy.mapping_for(node),
            stage,
        })
    }

    /// Maps a list of capabilities, keeping the first mapping per skill.
    ///
    /// Unmapped capabilities are omitted; scan order is preserved.
    #[must_use]
    pub fn map_all<I, S>(&self, capabilities: I) -> Vec<CapabilityMapping>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        capabilities
            .into_iter()
            .filter_map(|capability| self.map(capability.as_ref()))
            .filter(|mapping| seen.insert(mapping.skill_id.clone()))
            .collect()
    }
}

fn exact<'a>(taxonomy: &'a Taxonomy, normalized: &str) -> Option<&'a TaxonomyNode> {
    taxonomy.get(normalized).filter(|node| node.is_leaf())
}

fn caption<'a>(taxonomy: &'a Taxonomy, normalized: &str) -> Option<&'a TaxonomyNode> {
    taxonomy
        .leaves()
        .find(|leaf| normalize_name(leaf.caption()).contains(normalized))
}

fn heuristic<'a>(taxonomy: &'a Taxonomy, normalized: &str) -> Option<&'a TaxonomyNode> {
    FALLBACK_RULES
        .iter()
        .filter(|rule| rule.matches(normalized))
        .find_map(|rule| taxonomy.first_leaf(rule.target))
}

fn parent_inference<'a>(taxonomy: &'a Taxonomy, normalized: &str) -> Option<&'a TaxonomyNode> {
    taxonomy
        .get(normalized)
        .filter(|node| !node.is_leaf())
        .and_then(|node| taxonomy.first_leaf(node.name()))
}
