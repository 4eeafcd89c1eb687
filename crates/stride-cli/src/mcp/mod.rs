//! MCP server implementation for Stride
//!
//! Exposes the planning pipeline as four tools over the Model Context
//! Protocol, so that assistants can analyze a goal, break it down, schedule
//! tasks, or run the whole pipeline in one call.

use std::future::Future;

use anyhow::Result;
use jiff::Timestamp;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use stride_core::PlanAssembler;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{AnalyzeGoal, BreakdownTasks, CreateTimeline, McpResult, ProcessGoal};

/// MCP server for Stride
#[derive(Clone)]
pub struct StrideMcpServer {
    assembler: PlanAssembler,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StrideMcpServer {
    /// Create a new Stride MCP server
    pub fn new(assembler: PlanAssembler) -> Self {
        Self {
            assembler,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "analyze_goal_complexity",
        description = "Assess how hard a goal is before planning it. Provide the goal text and a timeframe such as '3 months' or '6 weeks'. Returns the complexity profile: `goal_category`, `difficulty_level` (beginner, intermediate or advanced), `success_probability` (0 to 1), `estimated_duration_weeks`, `time_investment` (low, medium or high), `risk_factors`, `resource_needs` and `skill_requirements`."
    )]
    async fn analyze_goal_complexity(&self, params: Parameters<AnalyzeGoal>) -> McpResult {
        handlers::analyze_goal_complexity(params)
    }

    #[tool(
        name = "generate_task_breakdown",
        description = "Break a goal into an ordered list of tasks with categories, priorities, effort estimates in hours, and dependencies. Optionally pass the complexity profile returned by analyze_goal_complexity; otherwise the goal is analyzed first. Every dependency refers to an earlier task title."
    )]
    async fn generate_task_breakdown(&self, params: Parameters<BreakdownTasks>) -> McpResult {
        handlers::generate_task_breakdown(params)
    }

    #[tool(
        name = "create_execution_timeline",
        description = "Schedule a task list over a timeframe. Returns `total_duration_days`, `total_estimated_hours`, `hours_per_week` (total hours spread over the timeframe, capped at 20), `weekly_schedule` (each week lists the next two tasks in order, starting from the week's index) and `milestones` (one every max(1, days / 30) days starting today). Tasks may only depend on tasks listed before them."
    )]
    async fn create_execution_timeline(&self, params: Parameters<CreateTimeline>) -> McpResult {
        handlers::create_execution_timeline(params, Timestamp::now())
    }

    #[tool(
        name = "process_goal",
        description = "Turn a goal into a complete action plan in one step: complexity analysis, task breakdown, timeline, success tips, and likely obstacles with mitigations. Optionally pass user_context with working_hours_per_week, preferred_working_days, and timezone. Falls back to the built-in planner when no external collaborator is available."
    )]
    async fn process_goal(&self, params: Parameters<ProcessGoal>) -> McpResult {
        handlers::process_goal(&self.assembler, params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StrideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stride".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Stride turns a personal goal and a timeframe into a structured, dated action plan.

## Tools
- `analyze_goal_complexity`: difficulty, success probability and expected duration
- `generate_task_breakdown`: ordered tasks with effort estimates and dependencies
- `create_execution_timeline`: a weekly schedule, hour budget and milestones for a task list
- `process_goal`: all of the above plus success tips and obstacles

## Workflow
Call `process_goal` for a complete plan. To refine a plan step by step, call `analyze_goal_complexity`, pass its result to `generate_task_breakdown`, edit the tasks as needed, then schedule them with `create_execution_timeline`.

Timeframes are free text such as "3 months", "6 weeks", or "1 year"; unrecognized units default to 30 days."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StrideMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stride MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
