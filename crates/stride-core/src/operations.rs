//! Common operations exposed by every interface.
//!
//! Each operation wraps one engine component behind a parameter struct from
//! [`crate::params`], so the CLI and the MCP server validate and report
//! errors the same way.

use jiff::Timestamp;

use crate::{
    engine::{ComplexityAnalyzer, TaskSynthesizer, TimelinePlanner},
    error::{StrideError, GOAL_AND_TIMEFRAME_REQUIRED},
    models::{validate_dependencies, ComplexityProfile, TaskRecord, TimelinePlan},
    params::{AnalyzeGoal, BreakdownTasks, CreateTimeline},
    Result,
};

/// Analyze a goal's complexity and feasibility.
///
/// # Examples
///
/// ```rust
/// # use stride_core::{operations::analyze_goal, params::AnalyzeGoal};
/// let profile = analyze_goal(&AnalyzeGoal {
///     goal: "Start a company".to_string(),
///     timeframe: "6 months".to_string(),
/// })?;
/// assert_eq!(profile.estimated_duration_weeks, 26);
/// # Ok::<(), stride_core::StrideError>(())
/// ```
pub fn analyze_goal(params: &AnalyzeGoal) -> Result<ComplexityProfile> {
    ComplexityAnalyzer::new().analyze(&params.goal, &params.timeframe)
}

/// Break a goal into an ordered task list.
///
/// Uses the supplied complexity profile, or analyzes the goal when none is
/// given.
///
/// # Errors
///
/// Returns `StrideError::InvalidInput` if the goal is empty, or if the goal
/// must be analyzed and the timeframe is empty.
pub fn breakdown_tasks(params: &BreakdownTasks) -> Result<Vec<TaskRecord>> {
    let profile = match &params.complexity {
        Some(profile) => profile.clone(),
        None => ComplexityAnalyzer::new().analyze(&params.goal, &params.timeframe)?,
    };

    TaskSynthesizer::new().synthesize(&params.goal, &params.timeframe, &profile)
}

/// Schedule a task list over a timeframe, anchored at `now`.
///
/// # Errors
///
/// Returns `StrideError::InvalidInput` if the timeframe is empty or the task
/// list has a duplicate title or a dependency on a task that does not
/// precede it.
pub fn create_timeline(params: &CreateTimeline, now: Timestamp) -> Result<TimelinePlan> {
    if params.timeframe.trim().is_empty() {
        return Err(StrideError::invalid_input(GOAL_AND_TIMEFRAME_REQUIRED));
    }

    validate_dependencies(&params.tasks)
        .map_err(|issue| StrideError::invalid_input(issue.to_string()))?;

    Ok(TimelinePlanner::new(now).plan(&params.tasks, &params.timeframe))
}
