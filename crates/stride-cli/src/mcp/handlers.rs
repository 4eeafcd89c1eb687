//! MCP tool handlers implementation

use jiff::Timestamp;
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stride_core::{display::TaskList, operations, params as core, Goal, PlanAssembler};

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// Deserializes transparently and borrows the wrapped type's schema, so core
/// parameter structs stay free of MCP-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type AnalyzeGoal = McpParams<core::AnalyzeGoal>;
pub type BreakdownTasks = McpParams<core::BreakdownTasks>;
pub type CreateTimeline = McpParams<core::CreateTimeline>;
pub type ProcessGoal = McpParams<core::ProcessGoal>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// A markdown summary for people followed by the JSON payload for agents.
fn respond<T: Serialize>(summary: String, payload: &T) -> McpResult {
    let json = serde_json::to_string_pretty(payload)
        .map_err(|e| ErrorData::internal_error(format!("Failed to encode result: {e}"), None))?;
    Ok(CallToolResult::success(vec![
        Content::text(summary),
        Content::text(json),
    ]))
}

pub fn analyze_goal_complexity(Parameters(params): Parameters<AnalyzeGoal>) -> McpResult {
    debug!("analyze_goal_complexity: {:?}", params);

    let profile = operations::analyze_goal(params.as_ref())
        .map_err(|e| to_mcp_error("Failed to analyze goal", &e))?;

    respond(profile.to_string(), &profile)
}

pub fn generate_task_breakdown(Parameters(params): Parameters<BreakdownTasks>) -> McpResult {
    debug!("generate_task_breakdown: {:?}", params);

    let tasks = operations::breakdown_tasks(params.as_ref())
        .map_err(|e| to_mcp_error("Failed to break down goal", &e))?;
    let tasks = TaskList(tasks);

    respond(tasks.to_string(), &tasks.0)
}

pub fn create_execution_timeline(
    Parameters(params): Parameters<CreateTimeline>,
    now: Timestamp,
) -> McpResult {
    debug!("create_execution_timeline: {} tasks", params.as_ref().tasks.len());

    let timeline = operations::create_timeline(params.as_ref(), now)
        .map_err(|e| to_mcp_error("Failed to create timeline", &e))?;

    respond(timeline.to_string(), &timeline)
}

/// Runs the full pipeline. A plan that could not be produced is returned as
/// a tool-level error carrying the failure envelope.
pub async fn process_goal(
    assembler: &PlanAssembler,
    Parameters(params): Parameters<ProcessGoal>,
) -> McpResult {
    debug!("process_goal: {:?}", params);

    let goal = Goal::from(params.into_inner());
    let result = assembler.assemble(&goal).await;

    if result.success {
        respond(result.to_string(), &result)
    } else {
        let json = serde_json::to_string_pretty(&result).map_err(|e| {
            ErrorData::internal_error(format!("Failed to encode result: {e}"), None)
        })?;
        Ok(CallToolResult::error(vec![Content::text(json)]))
    }
}
