//! Taxonomy services.

mod mapper;
mod rules;

pub use mapper::{MatchStage, Resolution, SkillMapper};
pub use rules::{FALLBACK_RULES, FallbackRule};
