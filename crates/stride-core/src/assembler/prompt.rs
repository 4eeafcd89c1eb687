//! Natural-language request sent to the collaborator.

use serde::Serialize;

use crate::{
    error::Result,
    models::{Goal, UserContext},
};

#[derive(Serialize)]
struct PromptContext<'a> {
    user_id: &'a str,
    preferences: Preferences<'a>,
}

#[derive(Serialize)]
struct Preferences<'a> {
    working_hours_per_week: u32,
    preferred_working_days: &'a [String],
    timezone: &'a str,
}

impl<'a> From<&'a UserContext> for PromptContext<'a> {
    fn from(context: &'a UserContext) -> Self {
        Self {
            user_id: &context.user_id,
            preferences: Preferences {
                working_hours_per_week: context.working_hours_per_week,
                preferred_working_days: &context.preferred_working_days,
                timezone: &context.timezone,
            },
        }
    }
}

/// Renders the plan request prompt for a goal.
///
/// The context is embedded as pretty-printed JSON so the collaborator can
/// read working preferences verbatim.
pub fn build_prompt(goal: &Goal, context: &UserContext) -> Result<String> {
    let context_json = serde_json::to_string_pretty(&PromptContext::from(context))?;

    Ok(format!(
        "I need help turning my dream/goal into an actionable plan. Here are the details:\n\
         \n\
         Goal: {goal}\n\
         Timeframe: {timeframe}\n\
         User Context: {context_json}\n\
         \n\
         Please help me by:\n\
         1. Analyzing the complexity and feasibility of this goal using the analyze_goal_complexity tool\n\
         2. Breaking it down into specific, actionable tasks with priorities using the generate_task_breakdown tool\n\
         3. Creating a realistic execution timeline with milestones using the create_execution_timeline tool\n\
         4. Providing success tips and potential obstacles to watch out for\n\
         \n\
         Use the available tools to provide a comprehensive analysis and action plan.\n\
         Be specific and actionable in your recommendations.\n",
        goal = goal.description,
        timeframe = goal.timeframe,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_goal_and_tools() {
        let goal = Goal::new("Learn to play guitar", "3 months");
        let prompt = build_prompt(&goal, &UserContext::for_user("user123")).unwrap();

        assert!(prompt.starts_with("I need help turning my dream/goal"));
        assert!(prompt.contains("Goal: Learn to play guitar\n"));
        assert!(prompt.contains("Timeframe: 3 months\n"));
        assert!(prompt.contains("analyze_goal_complexity"));
        assert!(prompt.contains("generate_task_breakdown"));
        assert!(prompt.contains("create_execution_timeline"));
    }

    #[test]
    fn test_prompt_nests_preferences() {
        let goal = Goal::new("Run a marathon", "1 year");
        let prompt = build_prompt(&goal, &UserContext::for_user("runner")).unwrap();

        assert!(prompt.contains("\"user_id\": \"runner\""));
        assert!(prompt.contains("  \"preferences\": {"));
        assert!(prompt.contains("\"working_hours_per_week\": 20"));
        assert!(prompt.contains("\"timezone\": \"UTC\""));
    }
}
