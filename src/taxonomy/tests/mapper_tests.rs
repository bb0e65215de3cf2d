//! Unit tests for capability resolution.

use super::fixture_schema_dir;
use crate::taxonomy::{
    adapters::SchemaDirectory,
    domain::{NodeKind, Taxonomy, TaxonomyNode},
    services::{FALLBACK_RULES, MatchStage, SkillMapper},
};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn mapper() -> SkillMapper {
    let schema_dir = fixture_schema_dir();
    SkillMapper::new(Arc::new(SchemaDirectory::load_store(Some(&schema_dir))))
}

#[rstest]
#[case("text_classification", "text_classification", MatchStage::Exact)]
#[case("Sentiment-Analysis", "sentiment_analysis", MatchStage::Exact)]
#[case("Text Classif", "text_classification", MatchStage::Caption)]
#[case("generation", "natural_language_generation", MatchStage::Caption)]
#[case("classification", "image_classification", MatchStage::Caption)]
#[case("tool", "tool_use_planning", MatchStage::Caption)]
#[case("chatbot", "natural_language_generation", MatchStage::Heuristic)]
#[case("conversational agent", "natural_language_generation", MatchStage::Heuristic)]
#[case("web search", "information_retrieval_synthesis", MatchStage::Heuristic)]
#[case("tooling", "tool_use_planning", MatchStage::Heuristic)]
#[case("natural_language_understanding", "sentiment_analysis", MatchStage::ParentInference)]
#[case("Images Computer Vision", "image_classification", MatchStage::ParentInference)]
fn resolution_reports_the_first_matching_stage(
    mapper: SkillMapper,
    #[case] capability: &str,
    #[case] skill_id: &str,
    #[case] stage: MatchStage,
) {
    let resolution = mapper
        .resolve(capability)
        .expect("capability should resolve");

    assert_eq!(resolution.mapping.skill_id, skill_id);
    assert_eq!(resolution.stage, stage);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("quantum teleportation")]
fn unknown_capabilities_are_not_found(mapper: SkillMapper, #[case] capability: &str) {
    assert_eq!(mapper.map(capability), None);
}

#[rstest]
fn map_all_keeps_one_entry_per_skill(mapper: SkillMapper) {
    let mappings = mapper.map_all(["chat", "chatbot", "tool"]);

    let skills: Vec<&str> = mappings
        .iter()
        .map(|mapping| mapping.skill_id.as_str())
        .collect();
    assert_eq!(
        skills,
        vec!["natural_language_generation", "tool_use_planning"]
    );
}

#[rstest]
fn map_all_preserves_scan_order_and_drops_unmapped(mapper: SkillMapper) {
    let mappings = mapper.map_all(vec![
        "web search".to_owned(),
        "juggling".to_owned(),
        "Text Classification".to_owned(),
        "retrieval".to_owned(),
    ]);

    let skills: Vec<&str> = mappings
        .iter()
        .map(|mapping| mapping.skill_id.as_str())
        .collect();
    assert_eq!(
        skills,
        vec!["information_retrieval_synthesis", "text_classification"]
    );
}

#[rstest]
#[case("chat")]
#[case("text_classification")]
#[case("natural_language_processing")]
fn degraded_mapper_returns_none_for_every_query(#[case] capability: &str) {
    let mapper = SkillMapper::unavailable("no schema directory");

    assert!(!mapper.is_available());
    assert_eq!(mapper.map(capability), None);
    assert!(mapper.map_all([capability]).is_empty());
}

#[rstest]
fn partial_caption_input_resolves_at_caption_stage() {
    let taxonomy = Taxonomy::new([
        TaxonomyNode::category("natural_language_processing", "Natural Language Processing", 1),
        TaxonomyNode::skill(
            "text_classification",
            "Text Classification",
            10101,
            NodeKind::Skill,
            Some("natural_language_processing".to_owned()),
            Some(("natural_language_processing".to_owned(), Some(1))),
        ),
    ]);
    let mapper = SkillMapper::new(Arc::new(taxonomy.into()));

    let resolution = mapper
        .resolve("Text Classificat")
        .expect("caption should match");

    assert_eq!(resolution.stage, MatchStage::Caption);
    assert_eq!(resolution.mapping.class_uid, 10101);
    assert_eq!(resolution.mapping.category_name, "Natural Language Processing");
}

#[rstest]
fn non_ascii_captions_compare_case_insensitively() {
    let taxonomy = Taxonomy::new([TaxonomyNode::skill(
        "etude_analysis",
        "Étude Analysis",
        901,
        NodeKind::Skill,
        None,
        None,
    )]);
    let mapper = SkillMapper::new(Arc::new(taxonomy.into()));

    let resolution = mapper.resolve("étude").expect("caption should match");

    assert_eq!(resolution.stage, MatchStage::Caption);
    assert_eq!(resolution.mapping.skill_id, "etude_analysis");
}

#[rstest]
fn heuristic_rule_with_missing_target_does_not_fire() {
    let taxonomy = Taxonomy::new([TaxonomyNode::skill(
        "summarization",
        "Summarization",
        104,
        NodeKind::Skill,
        None,
        None,
    )]);
    let mapper = SkillMapper::new(Arc::new(taxonomy.into()));

    assert_eq!(mapper.map("chat"), None);
}

#[test]
fn fallback_rules_keep_declared_order() {
    let triggers: Vec<&str> = FALLBACK_RULES.iter().map(|rule| rule.trigger).collect();

    assert_eq!(
        triggers,
        vec!["chat", "conversation", "classif", "retriev", "search", "tool"]
    );
}
