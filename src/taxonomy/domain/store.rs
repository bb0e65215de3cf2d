//! Immutable taxonomy and the loaded/unavailable store wrapper.

use super::{CapabilityMapping, NodeKind, TaxonomyNode};
use std::collections::{HashMap, HashSet};

/// A loaded taxonomy hierarchy.
///
/// Nodes keep their load order, which is the traversal order used to break
/// ties between equally good matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    nodes: Vec<TaxonomyNode>,
    index: HashMap<String, usize>,
    children: HashMap<String, Vec<usize>>,
}

impl Taxonomy {
    /// Builds a taxonomy from nodes in traversal order.
    ///
    /// When two nodes share a name the first one wins and later duplicates
    /// are dropped.
    #[must_use]
    pub fn new(nodes: impl IntoIterator<Item = TaxonomyNode>) -> Self {
        let mut taxonomy = Self::default();
        for node in nodes {
            if taxonomy.index.contains_key(node.name()) {
                continue;
            }
            let position = taxonomy.nodes.len();
            taxonomy.index.insert(node.name().to_owned(), position);
            if let Some(parent) = node.parent() {
                taxonomy
                    .children
                    .entry(parent.to_owned())
                    .or_default()
                    .push(position);
            }
            taxonomy.nodes.push(node);
        }
        taxonomy
    }

    /// Returns the node with the given normalized name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TaxonomyNode> {
        self.index.get(name).and_then(|&position| self.nodes.get(position))
    }

    /// Iterates all nodes in traversal order.
    pub fn nodes(&self) -> impl Iterator<Item = &TaxonomyNode> {
        self.nodes.iter()
    }

    /// Iterates leaf skills in traversal order.
    pub fn leaves(&self) -> impl Iterator<Item = &TaxonomyNode> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    /// Iterates the direct children of `name` in traversal order.
    pub fn children(&self, name: &str) -> impl Iterator<Item = &TaxonomyNode> {
        self.children
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&position| self.nodes.get(position))
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the taxonomy holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of leaf skills.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Returns the first leaf reachable from `name`, depth first.
    ///
    /// A leaf resolves to itself. Cycles in malformed parent chains are
    /// cut off.
    #[must_use]
    pub fn first_leaf(&self, name: &str) -> Option<&TaxonomyNode> {
        let mut visited = HashSet::new();
        self.first_leaf_from(name, &mut visited)
    }

    fn first_leaf_from<'a>(
        &'a self,
        name: &str,
        visited: &mut HashSet<String>,
    ) -> Option<&'a TaxonomyNode> {
        if !visited.insert(name.to_owned()) {
            return None;
        }
        let node = self.get(name)?;
        if node.is_leaf() {
            return Some(node);
        }
        self.children(name)
            .find_map(|child| self.first_leaf_from(child.name(), visited))
    }

    /// Builds the capability mapping payload for a node.
    #[must_use]
    pub fn mapping_for(&self, node: &TaxonomyNode) -> CapabilityMapping {
        let category = node
            .category()
            .and_then(|key| self.get(key))
            .filter(|candidate| candidate.kind() == NodeKind::Category);

        let (category_name, category_uid) = match (category, node.category()) {
            (Some(found), _) => (found.caption().to_owned(), found.id()),
            (None, Some(key)) => (key.to_owned(), node.category_uid().unwrap_or(0)),
            (None, None) => (String::new(), 0),
        };

        CapabilityMapping {
            skill_id: node.name().to_owned(),
            category_name,
            category_uid,
            class_name: node.caption().to_owned(),
            class_uid: node.class_uid().unwrap_or_else(|| node.id()),
        }
    }
}

/// Reason the taxonomy could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyUnavailable {
    reason: String,
}

impl TaxonomyUnavailable {
    /// Creates an unavailable marker with a diagnostic reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the diagnostic reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The taxonomy as seen by the skill mapper.
///
/// `Unavailable` is the degraded mode: every mapping query returns no
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyStore {
    /// A successfully loaded taxonomy.
    Loaded(Taxonomy),
    /// No taxonomy could be loaded.
    Unavailable(TaxonomyUnavailable),
}

impl TaxonomyStore {
    /// Creates a degraded store with the given reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(TaxonomyUnavailable::new(reason))
    }

    /// Returns the loaded taxonomy, if any.
    #[must_use]
    pub const fn taxonomy(&self) -> Option<&Taxonomy> {
        match self {
            Self::Loaded(taxonomy) => Some(taxonomy),
            Self::Unavailable(_) => None,
        }
    }

    /// Returns `true` when a taxonomy is loaded.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl From<Taxonomy> for TaxonomyStore {
    fn from(taxonomy: Taxonomy) -> Self {
        Self::Loaded(taxonomy)
    }
}
