//! Error types for taxonomy loading.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while reading a taxonomy schema directory.
///
/// These never abort startup: the loader turns them into
/// [`super::TaxonomyStore::Unavailable`].
#[derive(Debug, Clone, Error)]
pub enum TaxonomyLoadError {
    /// No schema directory was configured.
    #[error("no taxonomy schema directory configured")]
    NotConfigured,

    /// The configured schema directory does not exist.
    #[error("taxonomy schema directory not found: {0}")]
    MissingDirectory(Utf8PathBuf),

    /// The directory exists but holds no skill definitions.
    #[error("taxonomy schema directory {0} contains no skills")]
    Empty(Utf8PathBuf),

    /// Filesystem failure while reading the directory.
    #[error("failed to read taxonomy schema directory {path}: {source}")]
    Io {
        /// Directory being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },
}

impl TaxonomyLoadError {
    /// Wraps an I/O failure for `path`.
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}
