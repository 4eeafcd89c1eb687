//! Complexity analysis driven by an ordered rule table.
//!
//! Every rule whose trigger fires is applied, in table order. Label effects
//! accumulate (duplicates are skipped); scalar effects such as difficulty or
//! duration are simply overwritten, so the last matching rule wins.

use log::debug;

use super::{
    classifier::GoalClassifier,
    keywords::{
        GoalText, KeywordSet, ANALYZE_BUSINESS, ANALYZE_CREATIVE, ANALYZE_HEALTH,
        ANALYZE_LEARNING,
    },
};
use crate::{
    error::Result,
    models::{goal::require_goal_and_timeframe, ComplexityProfile, Difficulty, TimeInvestment},
};

/// Condition under which a complexity rule fires.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Word count within the inclusive range
    WordCount { min: usize, max: usize },
    /// Any keyword of the set occurs in the goal
    Keywords(KeywordSet),
}

impl Trigger {
    fn fires(&self, text: &GoalText) -> bool {
        match self {
            Trigger::WordCount { min, max } => (*min..=*max).contains(&text.word_count()),
            Trigger::Keywords(set) => text.contains_any(set),
        }
    }
}

/// A (trigger, effect) pair in the analyzer's rule table.
#[derive(Clone, Copy)]
pub struct ComplexityRule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub effect: fn(&mut ComplexityProfile),
}

/// Rules in evaluation order: word-count thresholds, then learning,
/// business, health and creative keywords.
pub const COMPLEXITY_RULES: [ComplexityRule; 6] = [
    ComplexityRule {
        name: "very long goal",
        trigger: Trigger::WordCount { min: 31, max: usize::MAX },
        effect: very_long_goal,
    },
    ComplexityRule {
        name: "long goal",
        trigger: Trigger::WordCount { min: 16, max: 30 },
        effect: long_goal,
    },
    ComplexityRule {
        name: "learning",
        trigger: Trigger::Keywords(ANALYZE_LEARNING),
        effect: learning_goal,
    },
    ComplexityRule {
        name: "business",
        trigger: Trigger::Keywords(ANALYZE_BUSINESS),
        effect: business_goal,
    },
    ComplexityRule {
        name: "health",
        trigger: Trigger::Keywords(ANALYZE_HEALTH),
        effect: health_goal,
    },
    ComplexityRule {
        name: "creative",
        trigger: Trigger::Keywords(ANALYZE_CREATIVE),
        effect: creative_goal,
    },
];

fn very_long_goal(profile: &mut ComplexityProfile) {
    profile.difficulty_level = Difficulty::Advanced;
    profile.success_probability = 0.5;
    add_labels(&mut profile.risk_factors, &["overly complex goal"]);
}

fn long_goal(profile: &mut ComplexityProfile) {
    profile.difficulty_level = Difficulty::Intermediate;
    profile.success_probability = 0.7;
}

fn learning_goal(profile: &mut ComplexityProfile) {
    add_labels(
        &mut profile.skill_requirements,
        &["continuous learning", "practice time"],
    );
    profile.time_investment = TimeInvestment::High;
    profile.estimated_duration_weeks = 12;
    add_labels(&mut profile.risk_factors, &["learning curve"]);
}

fn business_goal(profile: &mut ComplexityProfile) {
    add_labels(
        &mut profile.resource_needs,
        &["funding", "team", "market research", "legal setup"],
    );
    profile.difficulty_level = Difficulty::Advanced;
    profile.success_probability = 0.4;
    profile.estimated_duration_weeks = 26;
    add_labels(
        &mut profile.risk_factors,
        &["market competition", "funding challenges"],
    );
}

fn health_goal(profile: &mut ComplexityProfile) {
    add_labels(&mut profile.skill_requirements, &["habit formation"]);
    add_labels(&mut profile.resource_needs, &["gym access", "nutrition plan"]);
    profile.estimated_duration_weeks = 8;
    add_labels(&mut profile.risk_factors, &["motivation maintenance"]);
}

fn creative_goal(profile: &mut ComplexityProfile) {
    add_labels(&mut profile.skill_requirements, &["creative skills"]);
    add_labels(&mut profile.resource_needs, &["creative tools"]);
    profile.estimated_duration_weeks = 6;
}

fn add_labels(target: &mut Vec<String>, labels: &[&str]) {
    for label in labels {
        if !target.iter().any(|existing| existing == label) {
            target.push((*label).to_string());
        }
    }
}

/// Derives a [`ComplexityProfile`] from goal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityAnalyzer {
    classifier: GoalClassifier,
}

impl ComplexityAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes a goal.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `goal` or `timeframe` is empty.
    pub fn analyze(&self, goal: &str, timeframe: &str) -> Result<ComplexityProfile> {
        require_goal_and_timeframe(goal, timeframe)?;

        let text = GoalText::new(goal);
        let mut profile = ComplexityProfile::baseline(self.classifier.classify_text(&text));

        for rule in COMPLEXITY_RULES.iter().filter(|rule| rule.trigger.fires(&text)) {
            debug!("complexity rule '{}' fired", rule.name);
            (rule.effect)(&mut profile);
        }

        profile.estimated_duration_weeks = profile.estimated_duration_weeks.max(1);
        profile.success_probability = profile.success_probability.clamp(0.0, 1.0);

        Ok(profile)
    }
}
