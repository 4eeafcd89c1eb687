//! Goal classification by keyword precedence.

use super::keywords::{
    GoalText, KeywordSet, CLASSIFY_BUSINESS, CLASSIFY_CREATIVE, CLASSIFY_FINANCIAL,
    CLASSIFY_HEALTH, CLASSIFY_LEARNING, CLASSIFY_TRAVEL,
};
use crate::models::GoalCategory;

/// Ordered precedence table; the first matching entry wins.
pub const CATEGORY_RULES: [(KeywordSet, GoalCategory); 6] = [
    (CLASSIFY_LEARNING, GoalCategory::Learning),
    (CLASSIFY_BUSINESS, GoalCategory::Business),
    (CLASSIFY_HEALTH, GoalCategory::Health),
    (CLASSIFY_CREATIVE, GoalCategory::Creative),
    (CLASSIFY_TRAVEL, GoalCategory::Travel),
    (CLASSIFY_FINANCIAL, GoalCategory::Financial),
];

/// Maps free-text goals to a [`GoalCategory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalClassifier;

impl GoalClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies `goal`, falling back to [`GoalCategory::General`].
    pub fn classify(&self, goal: &str) -> GoalCategory {
        self.classify_text(&GoalText::new(goal))
    }

    pub(crate) fn classify_text(&self, text: &GoalText) -> GoalCategory {
        CATEGORY_RULES
            .iter()
            .find(|(set, _)| text.contains_any(set))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }
}
