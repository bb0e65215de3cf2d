//! Ordered heuristic fallback rules for capability strings.

/// A single trigger → target rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRule {
    /// Substring searched for in the normalized capability.
    pub trigger: &'static str,
    /// Skill the rule resolves to.
    pub target: &'static str,
}

impl FallbackRule {
    const fn new(trigger: &'static str, target: &'static str) -> Self {
        Self { trigger, target }
    }

    /// Returns `true` when the trigger occurs in `normalized`.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        normalized.contains(self.trigger)
    }
}

/// Fallback rules, evaluated in order. The first rule that fires wins.
pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule::new("chat", "natural_language_generation"),
    FallbackRule::new("conversation", "natural_language_generation"),
    FallbackRule::new("classif", "text_classification"),
    FallbackRule::new("retriev", "information_retrieval_synthesis"),
    FallbackRule::new("search", "information_retrieval_synthesis"),
    FallbackRule::new("tool", "tool_use_planning"),
];
