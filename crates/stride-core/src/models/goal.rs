//! Goal input and the optional context describing the person pursuing it.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StrideError, GOAL_AND_TIMEFRAME_REQUIRED};

/// A free-text goal together with the timeframe it should be achieved in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Goal {
    /// What the user wants to achieve, e.g. "Learn to play guitar"
    pub description: String,

    /// Natural-language duration, e.g. "3 months"
    pub timeframe: String,

    /// Working preferences of the user, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_context: Option<UserContext>,
}

impl Goal {
    /// Creates a goal without user context.
    pub fn new(description: impl Into<String>, timeframe: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            timeframe: timeframe.into(),
            user_context: None,
        }
    }

    /// Attaches user context to the goal.
    pub fn with_user_context(mut self, context: UserContext) -> Self {
        self.user_context = Some(context);
        self
    }

    /// Rejects goals whose description or timeframe is blank.
    pub fn validate(&self) -> Result<()> {
        require_goal_and_timeframe(&self.description, &self.timeframe)
    }
}

/// Shared check for the "goal and timeframe must both be present" rule.
pub(crate) fn require_goal_and_timeframe(goal: &str, timeframe: &str) -> Result<()> {
    if goal.trim().is_empty() || timeframe.trim().is_empty() {
        return Err(StrideError::invalid_input(GOAL_AND_TIMEFRAME_REQUIRED));
    }
    Ok(())
}

/// Working preferences that shape the plan prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserContext {
    /// Identifier used for attribution
    pub user_id: String,

    /// Hours per week the user can dedicate
    #[serde(default = "default_working_hours")]
    pub working_hours_per_week: u32,

    /// Lower-case weekday names the user prefers to work on
    #[serde(default = "default_working_days")]
    pub preferred_working_days: Vec<String>,

    /// IANA time zone name
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl UserContext {
    /// Context with default preferences for the given user.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            working_hours_per_week: default_working_hours(),
            preferred_working_days: default_working_days(),
            timezone: default_timezone(),
        }
    }
}

fn default_working_hours() -> u32 {
    20
}

fn default_working_days() -> Vec<String> {
    ["monday", "tuesday", "wednesday", "thursday", "friday"]
        .iter()
        .map(|day| day.to_string())
        .collect()
}

fn default_timezone() -> String {
    "UTC".to_string()
}
