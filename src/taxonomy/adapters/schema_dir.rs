//! OASF schema directory loader.
//!
//! Expected layout:
//!
//! ```text
//! <schema_dir>/skill_categories.json      {"attributes": {key: {caption, uid}}}
//! <schema_dir>/skills/<category>/**/*.json {name, caption, uid, extends, category?}
//! ```
//!
//! Entries are visited in sorted name order so traversal order is stable
//! across platforms.

use crate::taxonomy::domain::{
    NodeKind, Taxonomy, TaxonomyLoadError, TaxonomyNode, TaxonomyStore, normalize_name,
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io;
use tracing::{debug, info, warn};

const CATEGORIES_FILE: &str = "skill_categories.json";
const SKILLS_DIR: &str = "skills";
const ROOT_SKILL: &str = "base_skill";

#[derive(Debug, Default, Deserialize)]
struct CategoriesDocument {
    #[serde(default)]
    attributes: BTreeMap<String, CategoryDocument>,
}

#[derive(Debug, Default, Deserialize)]
struct CategoryDocument {
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    uid: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct SkillDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    uid: Option<u64>,
    #[serde(default)]
    extends: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// A skill document together with the category directory it was found in.
#[derive(Debug)]
struct LocatedSkill {
    document: SkillDocument,
    directory_category: Option<String>,
}

#[derive(Debug)]
struct CategoryEntry {
    key: String,
    caption: String,
    uid: u64,
}

/// Schema directory holding an OASF-style skill taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDirectory {
    path: Utf8PathBuf,
}

impl SchemaDirectory {
    /// Creates a loader rooted at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the schema directory path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Loads the taxonomy, returning the degraded store on any failure.
    ///
    /// `None` means no directory is configured. Failures are logged and
    /// never abort the caller.
    #[must_use]
    pub fn load_store(schema_dir: Option<&Utf8Path>) -> TaxonomyStore {
        let result = schema_dir
            .ok_or(TaxonomyLoadError::NotConfigured)
            .and_then(|path| Self::new(path).load());

        match result {
            Ok(taxonomy) => {
                info!(
                    nodes = taxonomy.len(),
                    skills = taxonomy.leaf_count(),
                    "skill taxonomy loaded"
                );
                TaxonomyStore::Loaded(taxonomy)
            }
            Err(err) => {
                warn!(error = %err, "skill taxonomy unavailable; capability mapping disabled");
                TaxonomyStore::unavailable(err.to_string())
            }
        }
    }

    /// Reads the schema directory into a [`Taxonomy`].
    ///
    /// Individual malformed files are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyLoadError::MissingDirectory`] when the directory
    /// does not exist, [`TaxonomyLoadError::Empty`] when it has no skill
    /// definitions, or [`TaxonomyLoadError::Io`] on filesystem failures.
    pub fn load(&self) -> Result<Taxonomy, TaxonomyLoadError> {
        let root = Dir::open_ambient_dir(&self.path, ambient_authority()).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                TaxonomyLoadError::MissingDirectory(self.path.clone())
            } else {
                TaxonomyLoadError::io(self.path.clone(), err)
            }
        })?;

        let categories = self.read_categories(&root);

        let skills_dir = match root.open_dir(SKILLS_DIR) {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(TaxonomyLoadError::Empty(self.path.clone()));
            }
            Err(err) => return Err(TaxonomyLoadError::io(self.path.join(SKILLS_DIR), err)),
        };

        let mut skills = Vec::new();
        collect_skills(
            &skills_dir,
            &self.path.join(SKILLS_DIR),
            None,
            &mut skills,
        )?;

        if skills.is_empty() {
            return Err(TaxonomyLoadError::Empty(self.path.clone()));
        }

        Ok(assemble(categories, skills))
    }

    fn read_categories(&self, root: &Dir) -> Vec<CategoryEntry> {
        let raw = match root.read_to_string(CATEGORIES_FILE) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!(path = %self.path.join(CATEGORIES_FILE), error = %err, "failed to read skill categories");
                }
                return Vec::new();
            }
        };

        match serde_json::from_str::<CategoriesDocument>(&raw) {
            Ok(document) => document
                .attributes
                .into_iter()
                .map(|(key, category)| {
                    let normalized = normalize_name(&key);
                    CategoryEntry {
                        caption: category.caption.unwrap_or_else(|| key.clone()),
                        uid: category.uid.unwrap_or(0),
                        key: normalized,
                    }
                })
                .collect(),
            Err(err) => {
                warn!(path = %self.path.join(CATEGORIES_FILE), error = %err, "malformed skill categories file");
                Vec::new()
            }
        }
    }
}

fn sorted_entries(dir: &Dir, path: &Utf8Path) -> Result<Vec<(String, bool)>, TaxonomyLoadError> {
    let mut entries = Vec::new();
    let listing = dir
        .entries()
        .map_err(|err| TaxonomyLoadError::io(path, err))?;
    for entry in listing {
        let dir_entry = entry.map_err(|err| TaxonomyLoadError::io(path, err))?;
        let file_type = dir_entry
            .file_type()
            .map_err(|err| TaxonomyLoadError::io(path, err))?;
        match dir_entry.file_name() {
            Ok(name) => entries.push((name, file_type.is_dir())),
            Err(err) => warn!(path = %path, error = %err, "skipping entry with non UTF-8 name"),
        }
    }
    entries.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(entries)
}

fn collect_skills(
    dir: &Dir,
    path: &Utf8Path,
    category: Option<&str>,
    skills: &mut Vec<LocatedSkill>,
) -> Result<(), TaxonomyLoadError> {
    for (name, is_dir) in sorted_entries(dir, path)? {
        let entry_path = path.join(&name);
        if is_dir {
            let child = dir
                .open_dir(&name)
                .map_err(|err| TaxonomyLoadError::io(entry_path.clone(), err))?;
            let child_category = category.map_or_else(|| normalize_name(&name), ToOwned::to_owned);
            collect_skills(&child, &entry_path, Some(&child_category), skills)?;
            continue;
        }

        if entry_path.extension() != Some("json") {
            continue;
        }

        let parsed = dir
            .read_to_string(&name)
            .map_err(|err| err.to_string())
            .and_then(|raw| {
                serde_json::from_str::<SkillDocument>(&raw).map_err(|err| err.to_string())
            });

        match parsed {
            Ok(document) if document.name.trim().is_empty() => {
                debug!(path = %entry_path, "skipping skill file without a name");
            }
            Ok(document) => skills.push(LocatedSkill {
                document,
                directory_category: category.map(ToOwned::to_owned),
            }),
            Err(err) => warn!(path = %entry_path, error = %err, "failed to load skill definition"),
        }
    }
    Ok(())
}

fn assemble(categories: Vec<CategoryEntry>, skills: Vec<LocatedSkill>) -> Taxonomy {
    let category_uids: HashMap<String, u64> = categories
        .iter()
        .map(|category| (category.key.clone(), category.uid))
        .collect();

    let skill_names: HashSet<String> = skills
        .iter()
        .map(|skill| normalize_name(&skill.document.name))
        .collect();

    let resolved: Vec<(String, &LocatedSkill, Option<String>, Option<String>)> = skills
        .iter()
        .map(|skill| {
            let name = normalize_name(&skill.document.name);
            let category = skill
                .document
                .category
                .as_deref()
                .map(normalize_name)
                .or_else(|| skill.directory_category.clone());
            let parent = skill
                .document
                .extends
                .as_deref()
                .map(normalize_name)
                .filter(|parent| {
                    parent != ROOT_SKILL && parent != &name && skill_names.contains(parent)
                })
                .or_else(|| {
                    category
                        .clone()
                        .filter(|key| category_uids.contains_key(key) && key != &name)
                });
            (name, skill, parent, category)
        })
        .collect();

    let parents: HashSet<&str> = resolved
        .iter()
        .filter_map(|(_, _, parent, _)| parent.as_deref())
        .collect();

    let category_nodes = categories
        .iter()
        .map(|category| TaxonomyNode::category(&category.key, &category.caption, category.uid));

    let skill_nodes = resolved.iter().map(|(name, skill, parent, category)| {
        let kind = if parents.contains(name.as_str()) {
            NodeKind::Class
        } else {
            NodeKind::Skill
        };
        let caption = skill
            .document
            .caption
            .clone()
            .unwrap_or_else(|| skill.document.name.clone());
        TaxonomyNode::skill(
            name.clone(),
            caption,
            skill.document.uid.unwrap_or(0),
            kind,
            parent.clone(),
            category
                .clone()
                .map(|key| {
                    let uid = category_uids.get(&key).copied();
                    (key, uid)
                }),
        )
    });

    Taxonomy::new(category_nodes.chain(skill_nodes))
}
