//! Capability interface for the external planning collaborator.
//!
//! A collaborator turns a natural-language request into a plan and then
//! executes it. The assembler only sees the two async stages below; how a
//! collaborator talks to the outside world (a subprocess, an HTTP agent, a
//! test double) is up to the implementation.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::Result,
    models::{Analysis, GoalCategory, TaskRecord, TimelinePlan},
};

/// Label attached to every attributed request.
pub const ATTRIBUTION_PLAN: &str = "dream-to-task";

/// End-user attribution forwarded with a plan request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribution {
    pub user_id: String,
    pub plan: String,
    pub goal_type: GoalCategory,
    pub timeframe: String,
}

impl Attribution {
    pub fn new(
        user_id: impl Into<String>,
        goal_type: GoalCategory,
        timeframe: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            plan: ATTRIBUTION_PLAN.to_string(),
            goal_type,
            timeframe: timeframe.into(),
        }
    }
}

/// Input to the plan generation stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    pub prompt: String,

    /// Present only when attribution is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,
}

/// An opaque plan produced by [`Collaborator::generate_plan`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollaboratorPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub body: Value,
}

impl CollaboratorPlan {
    /// Wraps a raw JSON document, lifting a string `id` field when present.
    pub fn from_json(body: Value) -> Self {
        Self {
            id: string_field(&body, "id"),
            body,
        }
    }
}

/// Result of [`Collaborator::run_plan`].
///
/// Accessors are lenient: a missing, null or malformed section reads as
/// absent instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub output: Value,
}

impl RunOutput {
    /// Wraps a raw JSON document. When the document nests its sections under
    /// an `output` object, that object is used.
    pub fn from_json(document: Value) -> Self {
        let id = string_field(&document, "id");
        let output = match document.get("output") {
            Some(nested) if nested.is_object() => nested.clone(),
            _ => document,
        };
        Self { id, output }
    }

    pub fn analysis(&self) -> Option<Analysis> {
        self.section("analysis")
    }

    /// Tasks reported by the run; empty when none are usable.
    pub fn tasks(&self) -> Vec<TaskRecord> {
        self.section("tasks").unwrap_or_default()
    }

    pub fn timeline(&self) -> Option<TimelinePlan> {
        self.section("timeline")
    }

    fn section<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.output.get(key).filter(|value| !value.is_null())?;
        serde_json::from_value(value.clone()).ok()
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// The external agentic planner.
///
/// Both stages are awaited sequentially by the assembler. Any error from
/// either stage aborts the collaborator path and triggers the local
/// fallback; implementations should not retry.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Turns a natural-language request into a plan.
    async fn generate_plan(&self, request: &PlanRequest) -> Result<CollaboratorPlan>;

    /// Executes a previously generated plan.
    async fn run_plan(&self, plan: &CollaboratorPlan) -> Result<RunOutput>;
}
