//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::TaskRecord;

/// Newtype wrapper for displaying a task breakdown.
///
/// # Examples
///
/// ```rust
/// use stride_core::{
///     display::TaskList,
///     engine::{ComplexityAnalyzer, TaskSynthesizer},
/// };
///
/// let profile = ComplexityAnalyzer::new().analyze("Write a novel", "6 months")?;
/// let tasks = TaskSynthesizer::new().synthesize("Write a novel", "6 months", &profile)?;
///
/// let output = TaskList(tasks).to_string();
/// assert!(output.contains("### Creative research and inspiration"));
/// # Ok::<(), stride_core::StrideError>(())
/// ```
pub struct TaskList(pub Vec<TaskRecord>);

impl TaskList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of scheduled effort across all tasks.
    pub fn total_hours(&self) -> u32 {
        self.0
            .iter()
            .map(TaskRecord::effort_hours)
            .fold(0, u32::saturating_add)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.0.iter()
    }
}

impl Index<usize> for TaskList {
    type Output = TaskRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TaskList {
    type Item = TaskRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }

        writeln!(
            f,
            "## Task Breakdown ({} tasks, {} hours)",
            self.len(),
            self.total_hours()
        )?;
        writeln!(f)?;
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskCategory};

    fn create_test_task(title: &str, hours: u32) -> TaskRecord {
        TaskRecord {
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            category: TaskCategory::Execution,
            estimated_hours: hours,
            dependencies: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_task_list_display_empty() {
        assert_eq!(TaskList(vec![]).to_string(), "No tasks found.\n");
    }

    #[test]
    fn test_task_list_display_totals() {
        let tasks = TaskList(vec![create_test_task("a", 3), create_test_task("b", 0)]);
        let output = tasks.to_string();

        assert_eq!(tasks.total_hours(), 4);
        assert!(output.starts_with("## Task Breakdown (2 tasks, 4 hours)"));
        assert!(output.contains("### a (medium priority, 3h)"));
        assert_eq!(tasks[1].title, "b");
    }
}
