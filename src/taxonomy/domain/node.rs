//! Taxonomy node value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a node in the category → class → skill hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A top-level category declared in the categories file.
    Category,
    /// A skill definition that other skills extend.
    Class,
    /// A leaf skill with no children.
    Skill,
}

impl NodeKind {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Class => "class",
            Self::Skill => "skill",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single category, class, or skill in the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    id: u64,
    name: String,
    caption: String,
    kind: NodeKind,
    parent: Option<String>,
    category: Option<String>,
    category_uid: Option<u64>,
    class_uid: Option<u64>,
}

impl TaxonomyNode {
    /// Creates a category node.
    #[must_use]
    pub fn category(name: impl Into<String>, caption: impl Into<String>, uid: u64) -> Self {
        let node_name = name.into();
        Self {
            id: uid,
            category: Some(node_name.clone()),
            name: node_name,
            caption: caption.into(),
            kind: NodeKind::Category,
            parent: None,
            category_uid: Some(uid),
            class_uid: None,
        }
    }

    /// Creates a class or skill node attached to `parent`.
    ///
    /// `category` is the key of the category the node belongs to and
    /// `category_uid` its identifier, when the category is declared.
    #[must_use]
    pub fn skill(
        name: impl Into<String>,
        caption: impl Into<String>,
        uid: u64,
        kind: NodeKind,
        parent: Option<String>,
        category: Option<(String, Option<u64>)>,
    ) -> Self {
        let (category_key, category_uid) = category.map_or((None, None), |(key, uid_opt)| {
            (Some(key), uid_opt)
        });
        Self {
            id: uid,
            name: name.into(),
            caption: caption.into(),
            kind,
            parent,
            category: category_key,
            category_uid,
            class_uid: Some(uid),
        }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the normalized node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable caption.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Returns the node kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the parent node name, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Returns the key of the owning category, if known.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the owning category identifier, if declared.
    #[must_use]
    pub const fn category_uid(&self) -> Option<u64> {
        self.category_uid
    }

    /// Returns the class identifier for class and skill nodes.
    #[must_use]
    pub const fn class_uid(&self) -> Option<u64> {
        self.class_uid
    }

    /// Returns `true` for leaf skills.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Skill
    }
}
