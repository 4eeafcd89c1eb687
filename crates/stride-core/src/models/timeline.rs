//! Timeline plan model: weekly schedule and milestones.

use std::collections::HashSet;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TaskRecord;

/// Upper bound on the weekly hour budget.
pub const MAX_HOURS_PER_WEEK: f64 = 20.0;

/// Focus label used for weeks with no task assigned.
pub const REVIEW_FOCUS: &str = "review";

/// Week-by-week and milestone schedule for a task list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TimelinePlan {
    pub total_duration_days: u32,

    /// Sum of task efforts
    pub total_estimated_hours: u32,

    /// Weekly hour budget, never above 20
    pub hours_per_week: f64,

    #[serde(default)]
    pub weekly_schedule: Vec<WeekEntry>,

    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// One week of the execution schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WeekEntry {
    /// 1-based week number
    pub week: u32,

    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub start_date: Timestamp,

    /// Titles of the tasks assigned to this week
    #[serde(default)]
    pub tasks: Vec<String>,

    /// Category of the first assigned task, or "review"
    pub focus_area: String,
}

/// A dated checkpoint in the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Milestone {
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub date: Timestamp,
    pub title: String,
    pub description: String,
}

/// A problem found in a timeline that was not planned locally.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineIssue {
    /// The timeline covers no days
    EmptyDuration,
    /// Weekly budget outside `0..=MAX_HOURS_PER_WEEK`
    BudgetOutOfRange(f64),
    /// Total hours differ from the sum of the task efforts
    HoursMismatch { reported: u32, expected: u32 },
    /// A scheduled week names a task missing from the task list
    UnknownTask { week: u32, task: String },
}

/// Checks that `timeline` is consistent with `tasks` and within the
/// planning limits.
pub fn validate_timeline(
    timeline: &TimelinePlan,
    tasks: &[TaskRecord],
) -> Result<(), TimelineIssue> {
    if timeline.total_duration_days == 0 {
        return Err(TimelineIssue::EmptyDuration);
    }
    if !(0.0..=MAX_HOURS_PER_WEEK).contains(&timeline.hours_per_week) {
        return Err(TimelineIssue::BudgetOutOfRange(timeline.hours_per_week));
    }

    let expected = tasks
        .iter()
        .map(TaskRecord::effort_hours)
        .fold(0u32, u32::saturating_add);
    if timeline.total_estimated_hours != expected {
        return Err(TimelineIssue::HoursMismatch {
            reported: timeline.total_estimated_hours,
            expected,
        });
    }

    let titles: HashSet<&str> = tasks.iter().map(|task| task.title.as_str()).collect();
    for entry in &timeline.weekly_schedule {
        if let Some(task) = entry.tasks.iter().find(|task| !titles.contains(task.as_str())) {
            return Err(TimelineIssue::UnknownTask {
                week: entry.week,
                task: task.clone(),
            });
        }
    }

    Ok(())
}
