//! Unit tests for cross-registry resolution.

mod router_tests;

use crate::federation::{
    domain::{ExternalRecord, ExternalSkill, Locator, RegistryId},
    services::SchemaTranslator,
};
use crate::taxonomy::{adapters::SchemaDirectory, services::SkillMapper};
use camino::Utf8PathBuf;
use std::sync::Arc;

fn fixture_mapper() -> Arc<SkillMapper> {
    let schema_dir =
        Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/taxonomy/schema");
    Arc::new(SkillMapper::new(Arc::new(SchemaDirectory::load_store(
        Some(&schema_dir),
    ))))
}

fn fixture_translator() -> SchemaTranslator {
    SchemaTranslator::new(fixture_mapper())
}

fn registry(value: &str) -> RegistryId {
    RegistryId::new(value).expect("registry id should be valid")
}

fn helper_agent() -> ExternalRecord {
    ExternalRecord {
        name: "helper-agent".to_owned(),
        version: "v1.2.0".to_owned(),
        description: "Answers support questions.".to_owned(),
        schema_version: "1.0.0".to_owned(),
        skills: vec![
            ExternalSkill {
                id: 10101,
                name: "natural_language_processing/text_classification".to_owned(),
            },
            ExternalSkill {
                id: 102,
                name: "natural_language_processing/natural_language_generation".to_owned(),
            },
            ExternalSkill {
                id: 999,
                name: "misc/interpretive_dance".to_owned(),
            },
        ],
        authors: vec!["Support Team".to_owned()],
        created_at: "2025-01-15T10:00:00Z".to_owned(),
        locators: vec![
            Locator::new("docker-image", "ghcr.io/example/helper-agent:1.2.0"),
            Locator::new("source_code", "https://github.com/example/helper-agent"),
            Locator::new("api", "https://helper.example.com/api"),
        ],
        extensions: Vec::new(),
    }
}
