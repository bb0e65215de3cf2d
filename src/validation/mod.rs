//! Batch-path validation and import of external agent records.
//!
//! [`RecordValidator`] checks raw OASF-style JSON before it enters the
//! registry. [`ImportedAgent`] extracts the local registry fields from a
//! validated record, and [`round_trip_preserved`] checks that export and
//! re-import keep the stable field subset.

mod import;
mod round_trip;
mod validator;

pub use import::ImportedAgent;
pub use round_trip::{StableFields, round_trip_preserved};
pub use validator::{
    DEFAULT_SUPPORTED_SCHEMA_VERSIONS, RecordIssue, RecordValidator,
    UnsupportedSchemaVersionError, ValidationReport,
};

#[cfg(test)]
mod tests;
