//! Complexity profile derived from a goal and its externally visible view.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Difficulty, GoalCategory, TimeInvestment};

/// Difficulty, feasibility and resource summary for a goal.
///
/// Produced once per request by the complexity analyzer and never mutated
/// afterwards. The label collections keep insertion order and hold no
/// duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ComplexityProfile {
    /// Category assigned by the goal classifier
    #[serde(default)]
    pub goal_category: GoalCategory,

    pub difficulty_level: Difficulty,

    /// Estimated probability of success, always within [0, 1]
    pub success_probability: f64,

    /// Estimated duration in weeks, at least 1
    pub estimated_duration_weeks: u32,

    pub time_investment: TimeInvestment,

    #[serde(default)]
    pub risk_factors: Vec<String>,

    #[serde(default)]
    pub resource_needs: Vec<String>,

    #[serde(default)]
    pub skill_requirements: Vec<String>,
}

impl ComplexityProfile {
    /// Starting point before any adjustment rule fires.
    pub fn baseline(goal_category: GoalCategory) -> Self {
        Self {
            goal_category,
            difficulty_level: Difficulty::Intermediate,
            success_probability: 0.7,
            estimated_duration_weeks: 4,
            time_investment: TimeInvestment::Medium,
            risk_factors: Vec::new(),
            resource_needs: Vec::new(),
            skill_requirements: Vec::new(),
        }
    }

    /// Builds the result-facing analysis record.
    pub fn to_analysis(&self) -> Analysis {
        Analysis::from(self)
    }
}

impl Default for ComplexityProfile {
    fn default() -> Self {
        Self::baseline(GoalCategory::General)
    }
}

/// Analysis section of a plan result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Analysis {
    pub complexity_level: Difficulty,
    pub feasibility_score: f64,
    #[serde(default)]
    pub key_challenges: Vec<String>,
    #[serde(default)]
    pub required_resources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_category: Option<GoalCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration_weeks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_investment: Option<TimeInvestment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skill_requirements: Vec<String>,
}

impl Analysis {
    /// True when the feasibility score is a probability in [0, 1].
    pub fn has_valid_feasibility(&self) -> bool {
        (0.0..=1.0).contains(&self.feasibility_score)
    }
}

impl From<&ComplexityProfile> for Analysis {
    fn from(profile: &ComplexityProfile) -> Self {
        Self {
            complexity_level: profile.difficulty_level,
            feasibility_score: profile.success_probability,
            key_challenges: profile.risk_factors.clone(),
            required_resources: profile.resource_needs.clone(),
            goal_category: Some(profile.goal_category),
            estimated_duration_weeks: Some(profile.estimated_duration_weeks),
            time_investment: Some(profile.time_investment),
            skill_requirements: profile.skill_requirements.clone(),
        }
    }
}
