//! Task synthesis: expands a goal into an ordered, dependency-aware task list.
//!
//! The list always opens with a research task and closes with a tracking and
//! review pair. In between, at most one category branch contributes a linear
//! chain of tasks; branches are tried in table order and the first match wins.

use log::debug;

use super::keywords::{
    GoalText, KeywordSet, TASKS_BUSINESS, TASKS_CREATIVE, TASKS_HEALTH, TASKS_LEARNING,
};
use crate::{
    error::{Result, StrideError, GOAL_AND_ANALYSIS_REQUIRED},
    models::{ComplexityProfile, Priority, TaskCategory, TaskRecord},
};

/// How a template's effort is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effort {
    /// Fixed number of hours
    Fixed(u32),
    /// Hours per estimated week of the goal
    PerWeek(u32),
}

impl Effort {
    fn hours(self, weeks: u32) -> u32 {
        match self {
            Effort::Fixed(hours) => hours,
            Effort::PerWeek(per_week) => per_week.saturating_mul(weeks).max(1),
        }
    }
}

/// Static description of a task the synthesizer can emit.
#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub category: TaskCategory,
    pub effort: Effort,
    pub tags: &'static [&'static str],
}

impl TaskTemplate {
    fn instantiate(&self, weeks: u32, dependencies: Vec<String>) -> TaskRecord {
        TaskRecord {
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            category: self.category,
            estimated_hours: self.effort.hours(weeks),
            dependencies,
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

/// A keyword-triggered chain of tasks.
#[derive(Debug, Clone, Copy)]
pub struct TaskBranch {
    pub keywords: KeywordSet,
    pub tasks: &'static [TaskTemplate],
}

pub const OPENING_TASK_TITLE: &str = "Goal analysis and research";
pub const TRACKING_TASK_TITLE: &str = "Set up progress tracking system";
pub const REVIEW_TASK_TITLE: &str = "Regular progress reviews and adjustments";

const LEARNING_TASKS: [TaskTemplate; 4] = [
    TaskTemplate {
        title: "Find learning resources and courses",
        description: "Research and select the best learning materials, courses, and mentors",
        priority: Priority::High,
        category: TaskCategory::Research,
        effort: Effort::Fixed(3),
        tags: &["learning", "resources"],
    },
    TaskTemplate {
        title: "Create structured learning plan",
        description: "Develop a detailed study schedule with milestones and practice sessions",
        priority: Priority::High,
        category: TaskCategory::Planning,
        effort: Effort::Fixed(2),
        tags: &["planning", "schedule"],
    },
    TaskTemplate {
        title: "Set up practice environment",
        description: "Create dedicated space and tools for consistent practice",
        priority: Priority::Medium,
        category: TaskCategory::Setup,
        effort: Effort::Fixed(2),
        tags: &["setup", "environment"],
    },
    TaskTemplate {
        title: "Regular practice and application",
        description: "Consistent daily/weekly practice sessions with real-world application",
        priority: Priority::Medium,
        category: TaskCategory::Execution,
        effort: Effort::PerWeek(5),
        tags: &["practice", "execution"],
    },
];

const BUSINESS_TASKS: [TaskTemplate; 4] = [
    TaskTemplate {
        title: "Market research and validation",
        description: "Analyze target market, competition, and validate business idea",
        priority: Priority::High,
        category: TaskCategory::Research,
        effort: Effort::Fixed(12),
        tags: &["market", "research", "validation"],
    },
    TaskTemplate {
        title: "Business model development",
        description: "Create comprehensive business plan with revenue model and strategy",
        priority: Priority::High,
        category: TaskCategory::Planning,
        effort: Effort::Fixed(16),
        tags: &["business-plan", "strategy"],
    },
    TaskTemplate {
        title: "MVP development and testing",
        description: "Build minimum viable product and gather user feedback",
        priority: Priority::High,
        category: TaskCategory::Development,
        effort: Effort::Fixed(40),
        tags: &["mvp", "development", "testing"],
    },
    TaskTemplate {
        title: "Funding and legal setup",
        description: "Secure funding, register business, and handle legal requirements",
        priority: Priority::Medium,
        category: TaskCategory::Legal,
        effort: Effort::Fixed(8),
        tags: &["funding", "legal"],
    },
];

const HEALTH_TASKS: [TaskTemplate; 4] = [
    TaskTemplate {
        title: "Health assessment and goal setting",
        description: "Evaluate current fitness level and set specific, measurable goals",
        priority: Priority::High,
        category: TaskCategory::Assessment,
        effort: Effort::Fixed(2),
        tags: &["health", "assessment"],
    },
    TaskTemplate {
        title: "Create personalized fitness plan",
        description: "Design workout routine and nutrition plan tailored to goals",
        priority: Priority::High,
        category: TaskCategory::Planning,
        effort: Effort::Fixed(3),
        tags: &["fitness", "planning"],
    },
    TaskTemplate {
        title: "Set up tracking and accountability",
        description: "Implement progress tracking system and find accountability partner",
        priority: Priority::Medium,
        category: TaskCategory::Setup,
        effort: Effort::Fixed(2),
        tags: &["tracking", "accountability"],
    },
    TaskTemplate {
        title: "Consistent execution and monitoring",
        description: "Follow fitness plan and regularly assess progress",
        priority: Priority::Medium,
        category: TaskCategory::Execution,
        effort: Effort::PerWeek(3),
        tags: &["execution", "monitoring"],
    },
];

const CREATIVE_TASKS: [TaskTemplate; 4] = [
    TaskTemplate {
        title: "Creative research and inspiration",
        description: "Study similar works, gather inspiration, and understand techniques",
        priority: Priority::High,
        category: TaskCategory::Research,
        effort: Effort::Fixed(4),
        tags: &["creative", "research", "inspiration"],
    },
    TaskTemplate {
        title: "Develop creative concept and style",
        description: "Define unique approach, style, and creative direction",
        priority: Priority::High,
        category: TaskCategory::Planning,
        effort: Effort::Fixed(6),
        tags: &["concept", "style", "planning"],
    },
    TaskTemplate {
        title: "Create initial prototypes or drafts",
        description: "Develop first versions and iterate based on feedback",
        priority: Priority::Medium,
        category: TaskCategory::Creation,
        effort: Effort::Fixed(12),
        tags: &["prototype", "creation"],
    },
    TaskTemplate {
        title: "Refine and finalize work",
        description: "Polish and complete the creative project",
        priority: Priority::Medium,
        category: TaskCategory::Refinement,
        effort: Effort::Fixed(8),
        tags: &["refinement", "finalization"],
    },
];

/// Category branches in precedence order.
pub const TASK_BRANCHES: [TaskBranch; 4] = [
    TaskBranch {
        keywords: TASKS_LEARNING,
        tasks: &LEARNING_TASKS,
    },
    TaskBranch {
        keywords: TASKS_BUSINESS,
        tasks: &BUSINESS_TASKS,
    },
    TaskBranch {
        keywords: TASKS_HEALTH,
        tasks: &HEALTH_TASKS,
    },
    TaskBranch {
        keywords: TASKS_CREATIVE,
        tasks: &CREATIVE_TASKS,
    },
];

const TRACKING_TASK: TaskTemplate = TaskTemplate {
    title: TRACKING_TASK_TITLE,
    description: "Create dashboard or system to monitor progress and milestones",
    priority: Priority::Medium,
    category: TaskCategory::Setup,
    effort: Effort::Fixed(2),
    tags: &["tracking", "setup"],
};

const REVIEW_TASK: TaskTemplate = TaskTemplate {
    title: REVIEW_TASK_TITLE,
    description: "Weekly/monthly assessments and plan modifications as needed",
    priority: Priority::Medium,
    category: TaskCategory::Monitoring,
    effort: Effort::PerWeek(1),
    tags: &["review", "adjustment"],
};

/// Expands goals into task lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskSynthesizer;

impl TaskSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Returns the branch the goal selects, if any.
    pub fn branch_for(&self, goal: &str) -> Option<&'static TaskBranch> {
        let text = GoalText::new(goal);
        TASK_BRANCHES
            .iter()
            .find(|branch| text.contains_any(&branch.keywords))
    }

    /// Synthesizes the ordered task list for a goal.
    ///
    /// Dependencies only ever name tasks emitted earlier in the list.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `goal` is empty.
    pub fn synthesize(
        &self,
        goal: &str,
        timeframe: &str,
        profile: &ComplexityProfile,
    ) -> Result<Vec<TaskRecord>> {
        if goal.trim().is_empty() {
            return Err(StrideError::invalid_input(GOAL_AND_ANALYSIS_REQUIRED));
        }

        let weeks = profile.estimated_duration_weeks.max(1);
        let mut tasks = vec![TaskRecord {
            title: OPENING_TASK_TITLE.to_string(),
            description: format!("Deep dive into requirements and best practices for: {goal}"),
            priority: Priority::High,
            category: TaskCategory::Research,
            estimated_hours: 4,
            dependencies: Vec::new(),
            tags: vec!["research".to_string(), "planning".to_string()],
        }];

        if let Some(branch) = self.branch_for(goal) {
            debug!(
                "task branch '{}' selected (timeframe: {timeframe})",
                branch.keywords.name
            );
            let mut previous: Option<&str> = None;
            for template in branch.tasks {
                let dependencies = previous
                    .map(|title| vec![title.to_string()])
                    .unwrap_or_default();
                tasks.push(template.instantiate(weeks, dependencies));
                previous = Some(template.title);
            }
        }

        tasks.push(TRACKING_TASK.instantiate(weeks, Vec::new()));
        tasks.push(REVIEW_TASK.instantiate(weeks, vec![TRACKING_TASK_TITLE.to_string()]));

        Ok(tasks)
    }
}
