//! Layered configuration for the switchboard.
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file, then
//! `SWITCHBOARD__*` environment variables with `__` separating nested keys
//! (e.g. `SWITCHBOARD__TAXONOMY__SCHEMA_DIR`).

use crate::federation::services::{DEFAULT_AGENT_LOCATOR_TYPES, DEFAULT_API_LOCATOR_TYPES};
use crate::logging::LoggingConfig;
use crate::validation::DEFAULT_SUPPORTED_SCHEMA_VERSIONS;
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SWITCHBOARD";

/// Registry identifier of the local store when none is configured.
pub const DEFAULT_LOCAL_REGISTRY_ID: &str = "nanda";

/// Remote call timeout in milliseconds when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchboardConfig {
    /// The local registry.
    pub local: LocalRegistryConfig,
    /// External registries, in registration order.
    pub registries: Vec<RemoteRegistryConfig>,
    /// Skill taxonomy source.
    pub taxonomy: TaxonomyConfig,
    /// Batch validation settings.
    pub validation: ValidationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// The local registry served from the agent store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalRegistryConfig {
    /// Registry identifier; unqualified identifiers route here.
    #[serde(default = "default_local_registry_id")]
    pub registry_id: String,
    /// Whether local lookups are served.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for LocalRegistryConfig {
    fn default() -> Self {
        Self {
            registry_id: default_local_registry_id(),
            enabled: default_true(),
        }
    }
}

/// One external registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRegistryConfig {
    /// Registry identifier used in `@<registry_id>:<name>`.
    pub registry_id: String,
    /// Whether lookups are delegated; disabled registries are still listed.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Endpoint address reported in the registry descriptor.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Per-call timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Locator types filling `agent_url`, in priority order.
    #[serde(default = "default_agent_locator_types")]
    pub agent_locator_types: Vec<String>,
    /// Locator types filling `api_url`, in priority order.
    #[serde(default = "default_api_locator_types")]
    pub api_locator_types: Vec<String>,
}

impl RemoteRegistryConfig {
    /// Creates an enabled registry entry with default settings.
    #[must_use]
    pub fn new(registry_id: impl Into<String>) -> Self {
        Self {
            registry_id: registry_id.into(),
            enabled: default_true(),
            endpoint: None,
            timeout_ms: default_timeout_ms(),
            agent_locator_types: default_agent_locator_types(),
            api_locator_types: default_api_locator_types(),
        }
    }
}

/// Skill taxonomy source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// OASF schema directory; mapping is disabled when unset.
    pub schema_dir: Option<Utf8PathBuf>,
}

/// Batch validation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Accepted OASF schema versions.
    #[serde(default = "default_supported_schema_versions")]
    pub supported_schema_versions: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            supported_schema_versions: default_supported_schema_versions(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_local_registry_id() -> String {
    DEFAULT_LOCAL_REGISTRY_ID.to_owned()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn default_agent_locator_types() -> Vec<String> {
    to_owned_list(DEFAULT_AGENT_LOCATOR_TYPES)
}

fn default_api_locator_types() -> Vec<String> {
    to_owned_list(DEFAULT_API_LOCATOR_TYPES)
}

fn default_supported_schema_versions() -> Vec<String> {
    to_owned_list(DEFAULT_SUPPORTED_SCHEMA_VERSIONS)
}

/// Configuration loader facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from an optional TOML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing or malformed, or
    /// when a value has the wrong type.
    pub fn load(path: Option<&Utf8Path>) -> Result<SwitchboardConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = path {
            builder = builder.add_source(
                File::from(file.as_std_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        builder
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from TOML text and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is malformed or a value has
    /// the wrong type.
    pub fn load_from_str(toml: &str) -> Result<SwitchboardConfig, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("validation.supported_schema_versions")
}
