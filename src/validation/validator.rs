//! Structural and schema-version checks for raw external records.

use serde_json::Value;
use std::collections::BTreeSet;
use thiserror::Error;

/// Schema versions accepted when none are configured.
pub const DEFAULT_SUPPORTED_SCHEMA_VERSIONS: &[&str] = &["1.0.0"];

/// A single validation failure.
///
/// The `Display` form is the stable, machine-greppable message reported to
/// callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordIssue {
    /// The record's schema version is not in the supported set.
    #[error("unsupported_schema_version: found={found}")]
    UnsupportedSchemaVersion {
        /// Version found in the record.
        found: String,
    },

    /// The record is not a JSON object.
    #[error("invalid_record: expected a JSON object")]
    NotAnObject,

    /// A required field is absent or empty.
    #[error("missing_required_field: {0}")]
    MissingRequiredField(&'static str),

    /// A field is present with the wrong JSON type.
    #[error("invalid_field_type: {field} (expected {expected})")]
    InvalidFieldType {
        /// Offending field.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
    },

    /// A skill entry has no name.
    #[error("invalid_skill: skills[{index}] has no name")]
    UnnamedSkill {
        /// Position in the skills array.
        index: usize,
    },
}

/// Error returned when a record declares an unsupported schema version.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported_schema_version: found={found}")]
pub struct UnsupportedSchemaVersionError {
    /// Version found in the record.
    pub found: String,
}

/// Outcome of validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<RecordIssue>,
}

impl ValidationReport {
    /// Returns `true` when no issues were found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the issues found.
    #[must_use]
    pub fn issues(&self) -> &[RecordIssue] {
        &self.issues
    }

    /// Returns the issue messages.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Splits the report into the `(ok, errors)` pair.
    #[must_use]
    pub fn into_parts(self) -> (bool, Vec<String>) {
        let errors = self.errors();
        (errors.is_empty(), errors)
    }
}

/// Validates raw external records against required fields and a set of
/// supported schema versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValidator {
    supported: BTreeSet<String>,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPORTED_SCHEMA_VERSIONS.iter().copied())
    }
}

impl RecordValidator {
    /// Creates a validator accepting the given schema versions.
    #[must_use]
    pub fn new<I, S>(supported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: supported
                .into_iter()
                .map(|version| version.into().trim().to_owned())
                .collect(),
        }
    }

    /// Returns the supported schema versions in sorted order.
    pub fn supported_versions(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }

    /// Validates a raw record.
    ///
    /// An unsupported schema version short-circuits: the report then holds
    /// that single issue.
    #[must_use]
    pub fn validate(&self, record: &Value) -> ValidationReport {
        if let Err(err) = self.ensure_supported_version(record) {
            return ValidationReport {
                issues: vec![RecordIssue::UnsupportedSchemaVersion { found: err.found }],
            };
        }

        let Some(fields) = record.as_object() else {
            return ValidationReport {
                issues: vec![RecordIssue::NotAnObject],
            };
        };

        let mut issues = Vec::new();

        match fields.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => {}
            Some(Value::String(_)) | Some(Value::Null) | None => {
                issues.push(RecordIssue::MissingRequiredField("name"));
            }
            Some(_) => issues.push(RecordIssue::InvalidFieldType {
                field: "name",
                expected: "string",
            }),
        }

        check_skills(fields.get("skills"), fields.get("capabilities"), &mut issues);

        let has_version = ["version", "schema_version", "$id"].iter().any(|key| {
            fields
                .get(*key)
                .and_then(Value::as_str)
                .is_some_and(|value| !value.trim().is_empty())
        });
        if !has_version {
            issues.push(RecordIssue::MissingRequiredField("version"));
        }

        ValidationReport { issues }
    }

    /// Checks only the schema version.
    ///
    /// Records without a parseable version pass; the structural checks in
    /// [`Self::validate`] report the missing field.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedSchemaVersionError`] when the record declares a
    /// version outside the supported set.
    pub fn ensure_supported_version(
        &self,
        record: &Value,
    ) -> Result<(), UnsupportedSchemaVersionError> {
        match schema_version_of(record) {
            Some(found) if !self.supported.contains(&found) => {
                Err(UnsupportedSchemaVersionError { found })
            }
            _ => Ok(()),
        }
    }
}

fn check_skills(skills: Option<&Value>, capabilities: Option<&Value>, issues: &mut Vec<RecordIssue>) {
    match (skills, capabilities) {
        (Some(Value::Array(entries)), _) => {
            for (index, entry) in entries.iter().enumerate() {
                let named = entry
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(|name| !name.trim().is_empty());
                if !named {
                    issues.push(RecordIssue::UnnamedSkill { index });
                }
            }
        }
        (Some(Value::Null) | None, Some(Value::Array(_))) => {}
        (Some(Value::Null) | None, Some(Value::Null) | None) => {
            issues.push(RecordIssue::MissingRequiredField("skills|capabilities"));
        }
        (Some(Value::Null) | None, Some(_)) => issues.push(RecordIssue::InvalidFieldType {
            field: "capabilities",
            expected: "array",
        }),
        (Some(_), _) => issues.push(RecordIssue::InvalidFieldType {
            field: "skills",
            expected: "array",
        }),
    }
}

/// Reads the schema version from `schema_version`, else from `$id`.
fn schema_version_of(record: &Value) -> Option<String> {
    let declared = record
        .get("schema_version")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|version| !version.is_empty());
    if let Some(version) = declared {
        return Some(version.to_owned());
    }

    record
        .get("$id")
        .and_then(Value::as_str)
        .and_then(|id| id.split('/').find(|segment| is_dotted_version(segment)))
        .map(ToOwned::to_owned)
}

fn is_dotted_version(segment: &str) -> bool {
    segment.contains('.')
        && segment
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit()))
}
