//! Core library for the stride goal planner.
//!
//! Stride turns a free-text goal ("learn guitar", "launch a startup") and a
//! coarse timeframe into an action plan: a complexity assessment, an ordered
//! task list with effort estimates and dependencies, and a week-by-week
//! timeline with milestones.
//!
//! # Layout
//!
//! - [`engine`]: the pure, deterministic classification and synthesis
//!   pipeline
//! - [`assembler`]: the entry point that combines the engine with an optional
//!   external [`Collaborator`], falling back to the engine on any failure
//! - [`models`]: plain data types, serialized as the result JSON
//! - [`display`]: markdown formatting of results
//! - [`params`] and [`operations`]: interface-neutral tool operations shared
//!   by the CLI and the MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use stride_core::{models::Goal, PlanAssemblerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let assembler = PlanAssemblerBuilder::new()
//!     .with_user_id("user123")
//!     .build()?;
//!
//! let result = assembler.assemble(&Goal::new("Learn to play guitar", "3 months")).await;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod operations;
pub mod params;

// Re-export commonly used types
pub use assembler::{
    Attribution, Collaborator, CollaboratorPlan, PlanAssembler, PlanAssemblerBuilder, PlanRequest,
    RunOutput, DEFAULT_USER_ID,
};
pub use display::{LocalDate, LocalDateTime, TaskList};
pub use error::{CollaboratorResultExt, CollaboratorStage, Result, StrideError};
pub use models::{
    Analysis, ComplexityProfile, Goal, PlanResult, TaskRecord, TimelinePlan, UserContext,
};
pub use params::{AnalyzeGoal, BreakdownTasks, CreateTimeline, ProcessGoal};
