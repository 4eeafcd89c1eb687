//! The plan result returned to callers.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Analysis, TaskRecord, TimelinePlan};

/// An obstacle the user is likely to meet and how to handle it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Obstacle {
    pub obstacle: String,
    pub mitigation: String,
}

impl Obstacle {
    pub fn new(obstacle: impl Into<String>, mitigation: impl Into<String>) -> Self {
        Self {
            obstacle: obstacle.into(),
            mitigation: mitigation.into(),
        }
    }
}

/// Outcome of one planning request.
///
/// Failures keep only `success`, `error`, `fallback` and `processed_at`, so
/// the serialized form of a failed request is the bare error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanResult {
    pub success: bool,

    /// True when the deterministic local engine produced the plan
    pub fallback: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Collaborator plan identifier, when the collaborator produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Collaborator run identifier, when the collaborator produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelinePlan>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_tips: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub potential_obstacles: Vec<Obstacle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub processed_at: Timestamp,
}

impl PlanResult {
    /// Error envelope for a request that could not be planned.
    pub fn failure(error: impl Into<String>, processed_at: Timestamp) -> Self {
        Self {
            success: false,
            fallback: true,
            user_id: None,
            plan_id: None,
            run_id: None,
            analysis: None,
            tasks: Vec::new(),
            timeline: None,
            success_tips: Vec::new(),
            potential_obstacles: Vec::new(),
            error: Some(error.into()),
            processed_at,
        }
    }
}
