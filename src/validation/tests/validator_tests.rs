//! Unit tests for raw record validation.

use crate::validation::{RecordIssue, RecordValidator, UnsupportedSchemaVersionError};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn validator() -> RecordValidator {
    RecordValidator::default()
}

fn valid_record() -> Value {
    json!({
        "name": "helper-agent",
        "version": "v1.2.0",
        "schema_version": "1.0.0",
        "skills": [
            { "id": 10101, "name": "natural_language_processing/text_classification" }
        ],
        "locators": [{ "type": "docker-image", "url": "ghcr.io/example/helper-agent" }]
    })
}

#[rstest]
fn well_formed_records_pass(validator: RecordValidator) {
    let (ok, errors) = validator.validate(&valid_record()).into_parts();

    assert!(ok);
    assert!(errors.is_empty());
}

#[rstest]
fn unsupported_version_is_the_only_reported_error(validator: RecordValidator) {
    let record = json!({ "schema_version": "0.8.0" });

    let (ok, errors) = validator.validate(&record).into_parts();

    assert!(!ok);
    assert_eq!(errors, vec!["unsupported_schema_version: found=0.8.0".to_owned()]);
}

#[rstest]
fn schema_version_is_read_from_the_id_url(validator: RecordValidator) {
    let mut record = valid_record();
    if let Some(fields) = record.as_object_mut() {
        fields.remove("schema_version");
        fields.insert(
            "$id".to_owned(),
            json!("https://schema.oasf.agntcy.org/0.7.0/objects/agent"),
        );
    }

    let report = validator.validate(&record);

    assert_eq!(
        report.issues(),
        &[RecordIssue::UnsupportedSchemaVersion {
            found: "0.7.0".to_owned()
        }]
    );
}

#[rstest]
fn configured_versions_replace_the_default() {
    let validator = RecordValidator::new(["0.8.0", " 1.1.0 "]);
    let mut record = valid_record();
    record["schema_version"] = json!("0.8.0");

    assert!(validator.validate(&record).is_ok());
    assert_eq!(
        validator.supported_versions().collect::<Vec<_>>(),
        vec!["0.8.0", "1.1.0"]
    );
    assert_eq!(
        validator.ensure_supported_version(&valid_record()),
        Err(UnsupportedSchemaVersionError {
            found: "1.0.0".to_owned()
        })
    );
}

#[rstest]
fn missing_fields_are_all_reported(validator: RecordValidator) {
    let record = json!({ "description": "nothing useful" });

    let errors = validator.validate(&record).errors();

    assert_eq!(
        errors,
        vec![
            "missing_required_field: name".to_owned(),
            "missing_required_field: skills|capabilities".to_owned(),
            "missing_required_field: version".to_owned(),
        ]
    );
}

#[rstest]
fn capabilities_satisfy_the_skills_requirement(validator: RecordValidator) {
    let record = json!({
        "name": "financial-analyzer",
        "version": "v1.0.0",
        "capabilities": ["chat", "search"]
    });

    assert!(validator.validate(&record).is_ok());
}

#[rstest]
#[case(json!({ "name": 7, "version": "v1", "skills": [] }), RecordIssue::InvalidFieldType { field: "name", expected: "string" })]
#[case(json!({ "name": "a", "version": "v1", "skills": "chat" }), RecordIssue::InvalidFieldType { field: "skills", expected: "array" })]
#[case(json!({ "name": "a", "version": "v1", "capabilities": "chat" }), RecordIssue::InvalidFieldType { field: "capabilities", expected: "array" })]
#[case(json!({ "name": "a", "version": "v1", "skills": [{ "id": 1 }] }), RecordIssue::UnnamedSkill { index: 0 })]
#[case(json!(["not", "an", "object"]), RecordIssue::NotAnObject)]
fn structural_problems_are_reported(
    validator: RecordValidator,
    #[case] record: Value,
    #[case] expected: RecordIssue,
) {
    let report = validator.validate(&record);

    assert_eq!(report.issues(), &[expected]);
}
