//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI and returned verbatim by the
//! MCP tools.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{
    Analysis, ComplexityProfile, DependencyIssue, Difficulty, GoalCategory, Obstacle, PlanResult,
    Priority, TaskCategory, TaskRecord, TimeInvestment, TimelineIssue, TimelinePlan,
};

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeInvestment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "### {heading}")?;
    writeln!(f)?;
    for item in items {
        writeln!(f, "- {item}")?;
    }
    writeln!(f)
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Complexity Analysis")?;
        writeln!(f)?;
        if let Some(category) = self.goal_category {
            writeln!(f, "- **Category**: {category}")?;
        }
        writeln!(f, "- **Complexity**: {}", self.complexity_level)?;
        writeln!(
            f,
            "- **Feasibility**: {:.0}%",
            self.feasibility_score * 100.0
        )?;
        if let Some(weeks) = self.estimated_duration_weeks {
            writeln!(f, "- **Estimated duration**: {weeks} weeks")?;
        }
        if let Some(investment) = self.time_investment {
            writeln!(f, "- **Time investment**: {investment}")?;
        }
        writeln!(f)?;

        write_list(f, "Key Challenges", &self.key_challenges)?;
        write_list(f, "Required Resources", &self.required_resources)?;
        write_list(f, "Skill Requirements", &self.skill_requirements)
    }
}

impl fmt::Display for ComplexityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_analysis())
    }
}

impl fmt::Display for TaskRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({} priority, {}h)",
            self.title, self.priority, self.estimated_hours
        )?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        writeln!(f, "- Category: {}", self.category)?;
        if !self.dependencies.is_empty() {
            writeln!(f, "- Depends on: {}", self.dependencies.join(", "))?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DependencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyIssue::DuplicateTitle(title) => {
                write!(f, "Task title '{title}' appears more than once")
            }
            DependencyIssue::UnknownDependency { task, dependency } => {
                write!(f, "Task '{task}' depends on '{dependency}', which does not precede it")
            }
        }
    }
}

impl fmt::Display for TimelineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineIssue::EmptyDuration => write!(f, "Timeline covers no days"),
            TimelineIssue::BudgetOutOfRange(hours) => {
                write!(f, "Weekly budget of {hours} hours is out of range")
            }
            TimelineIssue::HoursMismatch { reported, expected } => {
                write!(f, "Timeline totals {reported} hours but the tasks need {expected}")
            }
            TimelineIssue::UnknownTask { week, task } => {
                write!(f, "Week {week} schedules unknown task '{task}'")
            }
        }
    }
}

impl fmt::Display for TimelinePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Timeline")?;
        writeln!(f)?;
        writeln!(f, "- **Duration**: {} days", self.total_duration_days)?;
        writeln!(f, "- **Total effort**: {} hours", self.total_estimated_hours)?;
        writeln!(f, "- **Weekly budget**: {:.1} hours", self.hours_per_week)?;
        writeln!(f)?;

        if !self.weekly_schedule.is_empty() {
            writeln!(f, "### Weekly Schedule")?;
            writeln!(f)?;
            for week in &self.weekly_schedule {
                let tasks = if week.tasks.is_empty() {
                    "no new tasks".to_string()
                } else {
                    week.tasks.join(", ")
                };
                writeln!(
                    f,
                    "- Week {} ({}, {}): {tasks}",
                    week.week,
                    LocalDate(&week.start_date),
                    week.focus_area
                )?;
            }
            writeln!(f)?;
        }

        if !self.milestones.is_empty() {
            writeln!(f, "### Milestones")?;
            writeln!(f)?;
            for milestone in &self.milestones {
                writeln!(
                    f,
                    "- {} {}: {}",
                    LocalDate(&milestone.date),
                    milestone.title,
                    milestone.description
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**: {}", self.obstacle, self.mitigation)
    }
}

impl fmt::Display for PlanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.success {
            writeln!(f, "# Planning failed")?;
            writeln!(f)?;
            writeln!(f, "{}", self.error.as_deref().unwrap_or("unknown error"))?;
            return Ok(());
        }

        writeln!(f, "# Action Plan")?;
        writeln!(f)?;
        if let Some(user) = &self.user_id {
            writeln!(f, "- User: {user}")?;
        }
        let source = if self.fallback {
            "local analysis"
        } else {
            "collaborator"
        };
        writeln!(f, "- Source: {source}")?;
        writeln!(f, "- Processed: {}", LocalDateTime(&self.processed_at))?;
        writeln!(f)?;

        if let Some(analysis) = &self.analysis {
            write!(f, "{analysis}")?;
        }

        if !self.tasks.is_empty() {
            writeln!(f, "## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        if let Some(timeline) = &self.timeline {
            write!(f, "{timeline}")?;
        }

        if !self.success_tips.is_empty() {
            writeln!(f, "## Success Tips")?;
            writeln!(f)?;
            for tip in &self.success_tips {
                writeln!(f, "- {tip}")?;
            }
            writeln!(f)?;
        }

        if !self.potential_obstacles.is_empty() {
            writeln!(f, "## Potential Obstacles")?;
            writeln!(f)?;
            for obstacle in &self.potential_obstacles {
                writeln!(f, "- {obstacle}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{models::Goal, PlanAssemblerBuilder};

    fn processed_at() -> Timestamp {
        Timestamp::from_second(1640995200).unwrap() // 2022-01-01 00:00:00 UTC
    }

    #[test]
    fn test_task_display() {
        let task = TaskRecord {
            title: "Create structured learning plan".to_string(),
            description: "Develop a study schedule".to_string(),
            priority: Priority::High,
            category: TaskCategory::Planning,
            estimated_hours: 2,
            dependencies: vec!["Find learning resources and courses".to_string()],
            tags: vec!["planning".to_string(), "schedule".to_string()],
        };
        let output = task.to_string();

        assert!(output.starts_with("### Create structured learning plan (high priority, 2h)"));
        assert!(output.contains("- Category: planning"));
        assert!(output.contains("- Depends on: Find learning resources and courses"));
        assert!(output.contains("- Tags: planning, schedule"));
    }

    #[test]
    fn test_analysis_display() {
        let output = ComplexityProfile::baseline(GoalCategory::Travel).to_string();
        assert!(output.contains("- **Category**: travel"));
        assert!(output.contains("- **Feasibility**: 70%"));
        assert!(output.contains("- **Estimated duration**: 4 weeks"));
        assert!(!output.contains("### Key Challenges"));
    }

    #[test]
    fn test_failure_display() {
        let output = PlanResult::failure("Goal and timeframe are required", processed_at())
            .to_string();
        assert_eq!(
            output,
            "# Planning failed\n\nGoal and timeframe are required\n"
        );
    }

    #[test]
    fn test_full_plan_display_has_every_section() {
        let assembler = PlanAssemblerBuilder::new()
            .with_fixed_time(processed_at())
            .build()
            .unwrap();
        let result = assembler.assemble_locally(&Goal::new("Learn to play guitar", "3 months"));
        let output = result.to_string();

        for heading in [
            "# Action Plan",
            "## Complexity Analysis",
            "## Tasks",
            "## Timeline",
            "### Weekly Schedule",
            "### Milestones",
            "## Success Tips",
            "## Potential Obstacles",
        ] {
            assert!(output.contains(heading), "missing {heading}");
        }
        assert!(output.contains("- Source: local analysis"));
        assert!(output.contains("Milestone 4: Review progress and adjust plan (Day 88)"));
    }
}
