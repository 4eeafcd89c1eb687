//! Task record model and dependency validation.

use std::collections::HashSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Priority, TaskCategory};

/// One actionable unit of work within a plan.
///
/// The title doubles as the dependency key, so it must be unique within a
/// task list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskRecord {
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub priority: Priority,

    pub category: TaskCategory,

    /// Estimated effort in hours; missing values count as one hour
    #[serde(default = "default_hours")]
    pub estimated_hours: u32,

    /// Titles of earlier tasks that must be finished first
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_hours() -> u32 {
    1
}

impl TaskRecord {
    /// Effort used for scheduling, never below one hour.
    pub fn effort_hours(&self) -> u32 {
        self.estimated_hours.max(1)
    }
}

/// A dependency problem found in a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyIssue {
    /// Two tasks share a title
    DuplicateTitle(String),
    /// `task` depends on a title that does not appear before it
    UnknownDependency { task: String, dependency: String },
}

/// Checks that titles are unique and every dependency names an earlier task.
pub fn validate_dependencies(tasks: &[TaskRecord]) -> Result<(), DependencyIssue> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());

    for task in tasks {
        for dependency in &task.dependencies {
            if !seen.contains(dependency.as_str()) {
                return Err(DependencyIssue::UnknownDependency {
                    task: task.title.clone(),
                    dependency: dependency.clone(),
                });
            }
        }
        if !seen.insert(task.title.as_str()) {
            return Err(DependencyIssue::DuplicateTitle(task.title.clone()));
        }
    }

    Ok(())
}
