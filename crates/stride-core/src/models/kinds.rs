//! Enumerations describing goals, difficulty tiers and tasks.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Broad category a goal falls into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Learning,
    Business,
    Health,
    Creative,
    Travel,
    Financial,
    /// No keyword set matched
    #[default]
    General,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Learning => "learning",
            GoalCategory::Business => "business",
            GoalCategory::Health => "health",
            GoalCategory::Creative => "creative",
            GoalCategory::Travel => "travel",
            GoalCategory::Financial => "financial",
            GoalCategory::General => "general",
        }
    }
}

impl FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "learning" => Ok(GoalCategory::Learning),
            "business" => Ok(GoalCategory::Business),
            "health" => Ok(GoalCategory::Health),
            "creative" => Ok(GoalCategory::Creative),
            "travel" => Ok(GoalCategory::Travel),
            "financial" => Ok(GoalCategory::Financial),
            "general" => Ok(GoalCategory::General),
            _ => Err(format!("Invalid goal category: {s}")),
        }
    }
}

/// Difficulty tier of a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

/// Qualitative amount of time a goal demands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimeInvestment {
    Low,
    #[default]
    Medium,
    High,
}

impl TimeInvestment {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInvestment::Low => "low",
            TimeInvestment::Medium => "medium",
            TimeInvestment::High => "high",
        }
    }
}

/// Priority of a task within a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// Kind of work a task represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Research,
    Planning,
    Setup,
    Execution,
    Development,
    Legal,
    Assessment,
    Creation,
    Refinement,
    Monitoring,
    Testing,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Research => "research",
            TaskCategory::Planning => "planning",
            TaskCategory::Setup => "setup",
            TaskCategory::Execution => "execution",
            TaskCategory::Development => "development",
            TaskCategory::Legal => "legal",
            TaskCategory::Assessment => "assessment",
            TaskCategory::Creation => "creation",
            TaskCategory::Refinement => "refinement",
            TaskCategory::Monitoring => "monitoring",
            TaskCategory::Testing => "testing",
        }
    }
}

impl FromStr for TaskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "research" => Ok(TaskCategory::Research),
            "planning" => Ok(TaskCategory::Planning),
            "setup" => Ok(TaskCategory::Setup),
            "execution" => Ok(TaskCategory::Execution),
            "development" => Ok(TaskCategory::Development),
            "legal" => Ok(TaskCategory::Legal),
            "assessment" => Ok(TaskCategory::Assessment),
            "creation" => Ok(TaskCategory::Creation),
            "refinement" => Ok(TaskCategory::Refinement),
            "monitoring" => Ok(TaskCategory::Monitoring),
            "testing" => Ok(TaskCategory::Testing),
            _ => Err(format!("Invalid task category: {s}")),
        }
    }
}
