//! Export → import consistency check on the stable field subset.

use crate::federation::{
    domain::{CanonicalRecord, RegistryId},
    services::SchemaTranslator,
};

/// The fields export and re-import must preserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StableFields<'a> {
    /// Agent name.
    pub agent_name: &'a str,
    /// Agent version.
    pub version: &'a str,
    /// Description.
    pub description: &'a str,
    /// Agent URL.
    pub agent_url: &'a str,
}

impl<'a> From<&'a CanonicalRecord> for StableFields<'a> {
    fn from(record: &'a CanonicalRecord) -> Self {
        Self {
            agent_name: &record.agent_name,
            version: &record.version,
            description: &record.description,
            agent_url: &record.agent_url,
        }
    }
}

/// Returns `true` when exporting `record` and importing it back under
/// `registry_id` preserves [`StableFields`].
///
/// Free-text capabilities are folded into the description on export, so the
/// check only holds for records whose capabilities all map.
#[must_use]
pub fn round_trip_preserved(
    translator: &SchemaTranslator,
    record: &CanonicalRecord,
    registry_id: &RegistryId,
) -> bool {
    let restored = translator.to_canonical(&translator.to_external(record), registry_id);
    StableFields::from(record) == StableFields::from(&restored)
}
