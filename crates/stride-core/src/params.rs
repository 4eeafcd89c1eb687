//! Parameter structures for stride operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. With the `schema` feature they
//! also derive `schemars::JsonSchema`, which the MCP server uses to describe
//! its tools.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these structs with `#[serde(transparent)]` and add
//! their own derives:
//!
//! ```ignore
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct AnalyzeGoalRequest(stride_core::params::AnalyzeGoal);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{ComplexityProfile, Goal, TaskRecord, UserContext};

/// Parameters for analyzing a goal's complexity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AnalyzeGoal {
    /// The goal to analyze, e.g. "Learn to play guitar"
    pub goal: String,
    /// Timeframe to achieve it in, e.g. "3 months"
    pub timeframe: String,
}

/// Parameters for breaking a goal into tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BreakdownTasks {
    /// The goal to break down
    pub goal: String,
    /// Timeframe to achieve it in
    pub timeframe: String,
    /// Complexity profile from a previous analysis; derived from the goal
    /// when omitted
    #[serde(default)]
    pub complexity: Option<ComplexityProfile>,
}

/// Parameters for scheduling tasks over a timeframe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTimeline {
    /// Tasks in execution order; dependencies must name earlier tasks
    pub tasks: Vec<TaskRecord>,
    /// Timeframe to schedule over, e.g. "2 months"
    pub timeframe: String,
}

/// Parameters for producing a complete plan for a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProcessGoal {
    /// The goal to plan for
    pub goal: String,
    /// Timeframe to achieve it in
    pub timeframe: String,
    /// Working preferences of the user
    #[serde(default)]
    pub user_context: Option<UserContext>,
}

impl From<ProcessGoal> for Goal {
    fn from(params: ProcessGoal) -> Self {
        Goal {
            description: params.goal,
            timeframe: params.timeframe,
            user_context: params.user_context,
        }
    }
}
