//! Success tips and obstacle/mitigation pairs conditioned on goal keywords.

use super::keywords::{GoalText, KeywordSet, ADVICE_BUSINESS, ADVICE_HEALTH, ADVICE_LEARNING};
use crate::models::Obstacle;

const BASE_TIPS: [&str; 5] = [
    "Break large tasks into smaller, manageable chunks",
    "Set up regular progress check-ins and reviews",
    "Celebrate small wins along the way",
    "Build accountability through sharing progress with others",
    "Prepare for setbacks and have contingency plans",
];

const LEARNING_TIPS: [&str; 3] = [
    "Practice consistently, even if just for 15 minutes daily",
    "Apply new knowledge immediately to reinforce learning",
    "Join communities or find study partners",
];

const BASE_OBSTACLES: [(&str, &str); 3] = [
    (
        "Lack of motivation over time",
        "Set up reward systems and track visible progress",
    ),
    (
        "Time constraints",
        "Schedule dedicated time blocks and protect them",
    ),
    (
        "Skill gaps",
        "Identify learning resources early and allocate time for skill building",
    ),
];

/// Extra obstacles appended, in order, when their keywords match.
const KEYWORD_OBSTACLES: [(KeywordSet, &str, &str); 3] = [
    (
        ADVICE_LEARNING,
        "Plateaus on the learning curve",
        "Vary practice routines and ask mentors or peers for feedback",
    ),
    (
        ADVICE_BUSINESS,
        "Funding shortfalls and market competition",
        "Validate demand early and keep costs lean until traction is proven",
    ),
    (
        ADVICE_HEALTH,
        "Physical limitations or injury",
        "Increase intensity gradually and consult a professional when unsure",
    ),
];

/// Produces goal-conditioned advice. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryGenerator;

impl AdvisoryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Base tips, plus learning tips when the goal mentions learning.
    pub fn tips(&self, goal: &str) -> Vec<String> {
        let text = GoalText::new(goal);
        let mut tips: Vec<String> = BASE_TIPS.iter().map(|tip| tip.to_string()).collect();

        if text.contains_any(&ADVICE_LEARNING) {
            tips.extend(LEARNING_TIPS.iter().map(|tip| tip.to_string()));
        }

        tips
    }

    /// Base obstacles, plus one per matching keyword set.
    pub fn obstacles(&self, goal: &str) -> Vec<Obstacle> {
        let text = GoalText::new(goal);

        BASE_OBSTACLES
            .iter()
            .map(|(obstacle, mitigation)| Obstacle::new(*obstacle, *mitigation))
            .chain(
                KEYWORD_OBSTACLES
                    .iter()
                    .filter(|(set, _, _)| text.contains_any(set))
                    .map(|(_, obstacle, mitigation)| Obstacle::new(*obstacle, *mitigation)),
            )
            .collect()
    }
}
