mod common;

use common::{create_test_assembler, frozen_now};
use serde_json::{json, Value};
use stride_core::{
    engine::{parse_timeframe_days, MAX_HOURS_PER_WEEK},
    models::{validate_dependencies, Difficulty, GoalCategory, TimeInvestment},
    Goal,
};

#[tokio::test]
async fn test_guitar_goal_end_to_end() {
    let assembler = create_test_assembler();
    let result = assembler
        .assemble(&Goal::new("Learn to play guitar", "3 months"))
        .await;

    assert!(result.success);
    assert!(result.fallback);
    assert_eq!(result.user_id.as_deref(), Some("user123"));

    let analysis = result.analysis.as_ref().expect("analysis present");
    assert_eq!(analysis.goal_category, Some(GoalCategory::Learning));
    assert_eq!(analysis.complexity_level, Difficulty::Intermediate);
    assert_eq!(analysis.feasibility_score, 0.7);
    assert_eq!(analysis.estimated_duration_weeks, Some(12));
    assert_eq!(analysis.time_investment, Some(TimeInvestment::High));

    let research = result
        .tasks
        .iter()
        .position(|t| t.title == "Find learning resources and courses")
        .expect("learning research task");
    assert!(result.tasks[research].dependencies.is_empty());
    let plan = result
        .tasks
        .iter()
        .position(|t| t.title == "Create structured learning plan")
        .expect("learning plan task");
    assert!(plan > research);
    assert_eq!(
        result.tasks[plan].dependencies,
        vec!["Find learning resources and courses"]
    );

    let timeline = result.timeline.as_ref().expect("timeline present");
    assert_eq!(timeline.total_duration_days, 90);
    assert!(timeline.hours_per_week <= MAX_HOURS_PER_WEEK);
}

#[test]
fn test_empty_goal_envelope() {
    let result = create_test_assembler().assemble_locally(&Goal::new("", "1 month"));
    let value = serde_json::to_value(&result).expect("serializable");

    assert_eq!(value["success"], json!(false));
    assert_eq!(value["error"], json!("Goal and timeframe are required"));
    assert_eq!(value["fallback"], json!(true));
    assert_eq!(value["processed_at"], json!("2024-01-01T00:00:00Z"));
    assert!(value.get("tasks").is_none());
}

#[test]
fn test_overly_complex_goal() {
    let goal = "I would really like to find some way to slowly rearrange how I spend \
                ordinary days so that mornings are calm and evenings quiet and weekends \
                remain open for family friends neighbors and long walks";
    assert_eq!(goal.split_whitespace().count(), 35);

    let result = create_test_assembler().assemble_locally(&Goal::new(goal, "2 weeks"));
    assert!(result.success);

    let analysis = result.analysis.as_ref().expect("analysis present");
    assert_eq!(analysis.complexity_level, Difficulty::Advanced);
    assert_eq!(analysis.feasibility_score, 0.5);
    assert!(analysis
        .key_challenges
        .iter()
        .any(|c| c == "overly complex goal"));

    let timeline = result.timeline.as_ref().expect("timeline present");
    assert_eq!(timeline.total_duration_days, 14);
    assert_eq!(timeline.total_duration_days, parse_timeframe_days("2 weeks"));
}

#[test]
fn test_result_json_shape() {
    let result =
        create_test_assembler().assemble_locally(&Goal::new("Launch a startup", "6 months"));
    let value: Value = serde_json::to_value(&result).expect("serializable");

    for key in [
        "success",
        "fallback",
        "user_id",
        "analysis",
        "tasks",
        "timeline",
        "success_tips",
        "potential_obstacles",
        "processed_at",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(value.get("error").is_none());
    assert!(value.get("plan_id").is_none());

    let task = &value["tasks"][1];
    assert_eq!(task["title"], json!("Market research and validation"));
    assert_eq!(task["priority"], json!("high"));
    assert_eq!(task["category"], json!("research"));
    assert_eq!(task["dependencies"], json!([]));

    let obstacle = &value["potential_obstacles"][0];
    assert!(obstacle.get("obstacle").is_some());
    assert!(obstacle.get("mitigation").is_some());

    assert_eq!(value["timeline"]["weekly_schedule"][0]["week"], json!(1));
    assert_eq!(
        value["timeline"]["weekly_schedule"][0]["start_date"],
        json!(frozen_now().to_string())
    );
}

#[test]
fn test_every_result_keeps_dependency_order() {
    let assembler = create_test_assembler();
    for (goal, timeframe) in [
        ("Learn Spanish", "6 months"),
        ("Open a bakery business", "1 year"),
        ("Lose weight before summer", "3 months"),
        ("Design a board game", "2 months"),
        ("Explore Patagonia", "3 weeks"),
        ("Save money for retirement", "5 years"),
    ] {
        let result = assembler.assemble_locally(&Goal::new(goal, timeframe));
        assert!(result.success);
        assert_eq!(validate_dependencies(&result.tasks), Ok(()), "goal: {goal}");
    }
}
