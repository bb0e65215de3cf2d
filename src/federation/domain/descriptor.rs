//! Registry descriptors reported by adapters.

use super::{ParseRegistryStatusError, RegistryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reachability status of a configured registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryStatus {
    /// The registry answered its last health check (or has not been checked).
    Active,
    /// The last health check failed.
    Unreachable,
    /// The registry is configured but switched off.
    Disabled,
}

impl RegistryStatus {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Unreachable => "unreachable",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for RegistryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RegistryStatus {
    type Error = ParseRegistryStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "unreachable" => Ok(Self::Unreachable),
            "disabled" => Ok(Self::Disabled),
            _ => Err(ParseRegistryStatusError(value.to_owned())),
        }
    }
}

/// Which adapter variant serves a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// Backed by the local agent store.
    Local,
    /// Backed by an external registry client.
    Remote,
}

impl AdapterKind {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing one configured registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDescriptor {
    registry_id: RegistryId,
    adapter_kind: AdapterKind,
    status: RegistryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    endpoint: Option<String>,
    skill_mapping: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checked_at: Option<DateTime<Utc>>,
}

impl RegistryDescriptor {
    /// Creates an active, never-checked descriptor.
    #[must_use]
    pub const fn new(registry_id: RegistryId, adapter_kind: AdapterKind) -> Self {
        Self {
            registry_id,
            adapter_kind,
            status: RegistryStatus::Active,
            endpoint: None,
            skill_mapping: false,
            checked_at: None,
        }
    }

    /// Sets the remote endpoint address.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Records whether capability mapping against a taxonomy is active.
    #[must_use]
    pub const fn with_skill_mapping(mut self, enabled: bool) -> Self {
        self.skill_mapping = enabled;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: RegistryStatus) -> Self {
        self.status = status;
        self
    }

    /// Records the outcome of a health check.
    pub fn record_check(&mut self, status: RegistryStatus, checked_at: DateTime<Utc>) {
        self.status = status;
        self.checked_at = Some(checked_at);
    }

    /// Returns the registry identifier.
    #[must_use]
    pub const fn registry_id(&self) -> &RegistryId {
        &self.registry_id
    }

    /// Returns the adapter variant.
    #[must_use]
    pub const fn adapter_kind(&self) -> AdapterKind {
        self.adapter_kind
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> RegistryStatus {
        self.status
    }

    /// Returns the remote endpoint, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Returns `true` when capabilities are mapped against a taxonomy.
    #[must_use]
    pub const fn skill_mapping(&self) -> bool {
        self.skill_mapping
    }

    /// Returns when the last health check ran.
    #[must_use]
    pub const fn checked_at(&self) -> Option<DateTime<Utc>> {
        self.checked_at
    }
}
