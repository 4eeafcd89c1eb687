//! Assembler tests covering the local path and every collaborator outcome.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jiff::Timestamp;
use serde_json::{json, Value};

use super::*;
use crate::{
    error::{CollaboratorStage, StrideError},
    models::{GoalCategory, UserContext, MAX_HOURS_PER_WEEK},
};

fn frozen_now() -> Timestamp {
    Timestamp::from_second(1_704_067_200).unwrap() // 2024-01-01 00:00:00 UTC
}

fn guitar() -> Goal {
    Goal::new("Learn to play guitar", "3 months")
}

/// Scripted collaborator that records the requests it receives.
struct ScriptedCollaborator {
    generate: std::result::Result<Value, &'static str>,
    run: std::result::Result<Value, &'static str>,
    requests: Mutex<Vec<PlanRequest>>,
}

impl ScriptedCollaborator {
    fn succeeding(run: Value) -> Self {
        Self {
            generate: Ok(json!({"id": "plan-42"})),
            run: Ok(run),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing_generate() -> Self {
        Self {
            generate: Err("service unavailable"),
            run: Ok(json!({})),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing_run() -> Self {
        Self {
            generate: Ok(json!({"id": "plan-42"})),
            run: Err("run timed out"),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Collaborator for ScriptedCollaborator {
    async fn generate_plan(&self, request: &PlanRequest) -> Result<CollaboratorPlan> {
        self.requests.lock().unwrap().push(request.clone());
        self.generate
            .clone()
            .map(CollaboratorPlan::from_json)
            .map_err(|e| StrideError::collaborator(CollaboratorStage::Generate).with_message(e))
    }

    async fn run_plan(&self, _plan: &CollaboratorPlan) -> Result<RunOutput> {
        self.run
            .clone()
            .map(RunOutput::from_json)
            .map_err(|e| StrideError::collaborator(CollaboratorStage::Run).with_message(e))
    }
}

fn assembler_with(collaborator: Arc<ScriptedCollaborator>) -> PlanAssembler {
    PlanAssemblerBuilder::new()
        .with_user_id("user123")
        .with_fixed_time(frozen_now())
        .with_collaborator(collaborator)
        .build()
        .unwrap()
}

fn local_assembler() -> PlanAssembler {
    PlanAssemblerBuilder::new()
        .with_user_id("user123")
        .with_fixed_time(frozen_now())
        .build()
        .unwrap()
}

#[test]
fn test_builder_rejects_blank_user() {
    let err = PlanAssemblerBuilder::new().with_user_id("  ").build().unwrap_err();
    assert!(matches!(err, StrideError::Configuration { .. }));
}

#[test]
fn test_builder_defaults() {
    let assembler = PlanAssemblerBuilder::new().build().unwrap();
    assert_eq!(assembler.user_id(), DEFAULT_USER_ID);
    assert!(!assembler.has_collaborator());
}

#[test]
fn test_local_plan_for_guitar() {
    let result = local_assembler().assemble_locally(&guitar());

    assert!(result.success);
    assert!(result.fallback);
    assert_eq!(result.user_id.as_deref(), Some("user123"));
    assert!(result.plan_id.is_none());
    assert_eq!(result.processed_at, frozen_now());

    let analysis = result.analysis.unwrap();
    assert_eq!(analysis.feasibility_score, 0.7);
    assert_eq!(analysis.goal_category, Some(GoalCategory::Learning));

    assert_eq!(result.tasks[1].title, "Find learning resources and courses");
    assert!(result.tasks[1].dependencies.is_empty());
    assert_eq!(
        result.tasks[2].dependencies,
        vec!["Find learning resources and courses"]
    );

    let timeline = result.timeline.unwrap();
    assert_eq!(timeline.total_duration_days, 90);
    // checkpoint cadence
    assert_eq!(timeline.milestones.len(), 4);
    assert_eq!(
        timeline.milestones[0].description,
        "Review progress and adjust plan (Day 22)"
    );

    assert_eq!(result.success_tips.len(), 8);
    assert_eq!(result.potential_obstacles.len(), 4);
}

#[test]
fn test_local_plan_rejects_empty_goal() {
    let result = local_assembler().assemble_locally(&Goal::new("", "1 month"));

    assert!(!result.success);
    assert!(result.fallback);
    assert_eq!(result.error.as_deref(), Some("Goal and timeframe are required"));
    assert!(result.tasks.is_empty());
    assert!(result.timeline.is_none());
}

#[test]
fn test_local_plan_is_deterministic_with_fixed_time() {
    let assembler = local_assembler();
    assert_eq!(
        assembler.assemble_locally(&guitar()),
        assembler.assemble_locally(&guitar())
    );
}

#[tokio::test]
async fn test_assemble_without_collaborator_runs_locally() {
    let result = local_assembler().assemble(&guitar()).await;
    assert!(result.success);
    assert!(result.fallback);
}

#[tokio::test]
async fn test_collaborator_path_without_collaborator_falls_back() {
    let result = local_assembler().assemble_via_collaborator(&guitar()).await;
    assert!(result.success);
    assert!(result.fallback);
}

#[tokio::test]
async fn test_collaborator_success_keeps_reported_sections() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({
        "id": "run-7",
        "output": {
            "analysis": {
                "complexity_level": "beginner",
                "feasibility_score": 0.9,
                "key_challenges": ["finger pain"],
                "required_resources": ["guitar"]
            },
            "tasks": [
                {"title": "Buy a guitar", "description": "Pick an acoustic", "category": "setup"},
                {
                    "title": "Learn chords",
                    "description": "G, C, D",
                    "category": "execution",
                    "priority": "high",
                    "estimated_hours": 10,
                    "dependencies": ["Buy a guitar"]
                }
            ]
        }
    })));
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    assert!(result.success);
    assert!(!result.fallback);
    assert_eq!(result.plan_id.as_deref(), Some("plan-42"));
    assert_eq!(result.run_id.as_deref(), Some("run-7"));
    assert_eq!(result.analysis.unwrap().feasibility_score, 0.9);
    assert_eq!(result.tasks.len(), 2);
    assert_eq!(result.tasks[0].estimated_hours, 1);

    // no reported timeline: computed locally from the reported tasks, monthly cadence
    let timeline = result.timeline.unwrap();
    assert_eq!(timeline.total_estimated_hours, 11);
    assert_eq!(timeline.milestones[0].date, frozen_now());
    assert_eq!(timeline.milestones[0].title, "Milestone 1");
    assert_eq!(timeline.milestones.len(), 30);
}

#[tokio::test]
async fn test_collaborator_empty_output_is_filled_locally() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({
        "analysis": {},
        "tasks": [],
        "timeline": {}
    })));
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    assert!(!result.fallback);
    assert_eq!(result.plan_id.as_deref(), Some("plan-42"));
    assert!(result.run_id.is_none());
    assert_eq!(result.analysis.unwrap().feasibility_score, 0.7);
    assert_eq!(result.tasks.len(), 7);
    assert_eq!(result.timeline.unwrap().total_duration_days, 90);
}

#[tokio::test]
async fn test_collaborator_tasks_with_dangling_dependencies_are_replaced() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({
        "tasks": [
            {"title": "Practice", "description": "", "category": "execution",
             "dependencies": ["Buy a guitar"]}
        ]
    })));
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    assert!(!result.fallback);
    assert_eq!(result.tasks[0].title, "Goal analysis and research");
    assert_eq!(validate_dependencies(&result.tasks), Ok(()));
}

#[tokio::test]
async fn test_generate_failure_falls_back() {
    let collaborator = Arc::new(ScriptedCollaborator::failing_generate());
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    assert!(result.success);
    assert!(result.fallback);
    assert!(result.plan_id.is_none());
    assert_eq!(result.tasks.len(), 7);
}

#[tokio::test]
async fn test_run_failure_falls_back() {
    let collaborator = Arc::new(ScriptedCollaborator::failing_run());
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    assert!(result.success);
    assert!(result.fallback);
    assert!(result.run_id.is_none());
}

#[tokio::test]
async fn test_invalid_input_never_reaches_collaborator() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({})));
    let result = assembler_with(collaborator.clone())
        .assemble(&Goal::new("Learn piano", ""))
        .await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Goal and timeframe are required"));
    assert!(collaborator.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_request_carries_attribution_and_context() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({})));
    let goal = guitar().with_user_context(UserContext {
        working_hours_per_week: 5,
        ..UserContext::for_user("user123")
    });
    assembler_with(collaborator.clone()).assemble(&goal).await;

    let requests = collaborator.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].prompt.contains("\"working_hours_per_week\": 5"));

    let attribution = requests[0].attribution.as_ref().unwrap();
    assert_eq!(attribution.user_id, "user123");
    assert_eq!(attribution.goal_type, GoalCategory::Learning);
    assert_eq!(attribution.timeframe, "3 months");
}

#[test]
fn test_attribution_can_be_disabled() {
    let assembler = PlanAssemblerBuilder::new()
        .with_attribution(false)
        .build()
        .unwrap();
    let request = assembler.plan_request(&guitar()).unwrap();

    assert!(request.attribution.is_none());
    assert!(request.prompt.contains("\"user_id\": \"default-user\""));
}

#[tokio::test]
async fn test_collaborator_sections_out_of_range_are_replaced() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({
        "analysis": {"complexity_level": "beginner", "feasibility_score": 3.5},
        "tasks": [
            {"title": "Practice", "description": "", "category": "execution",
             "dependencies": ["Buy a guitar"]}
        ],
        "timeline": {
            "total_duration_days": 0,
            "total_estimated_hours": 999,
            "hours_per_week": 80.0,
            "weekly_schedule": [
                {"week": 1, "start_date": "2024-01-01T00:00:00Z",
                 "tasks": ["Practice"], "focus_area": "execution"}
            ],
            "milestones": []
        }
    })));
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    assert!(!result.fallback);
    assert_eq!(result.analysis.unwrap().feasibility_score, 0.7);
    assert_eq!(result.tasks[0].title, "Goal analysis and research");

    let timeline = result.timeline.unwrap();
    assert_eq!(timeline.total_duration_days, 90);
    assert!(timeline.hours_per_week <= MAX_HOURS_PER_WEEK);
    assert_eq!(
        timeline.total_estimated_hours,
        result.tasks.iter().map(TaskRecord::effort_hours).sum::<u32>()
    );
    assert_eq!(validate_timeline(&timeline, &result.tasks), Ok(()));
}

#[tokio::test]
async fn test_collaborator_consistent_timeline_is_kept() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({
        "tasks": [
            {"title": "Buy a guitar", "description": "", "category": "setup"},
            {"title": "Learn chords", "description": "", "category": "execution",
             "estimated_hours": 10, "dependencies": ["Buy a guitar"]}
        ],
        "timeline": {
            "total_duration_days": 90,
            "total_estimated_hours": 11,
            "hours_per_week": 2.5,
            "weekly_schedule": [
                {"week": 1, "start_date": "2024-01-01T00:00:00Z",
                 "tasks": ["Buy a guitar", "Learn chords"], "focus_area": "setup"}
            ],
            "milestones": []
        }
    })));
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    let timeline = result.timeline.unwrap();
    assert_eq!(timeline.hours_per_week, 2.5);
    assert_eq!(timeline.weekly_schedule.len(), 1);
    assert!(timeline.milestones.is_empty());
}

#[tokio::test]
async fn test_collaborator_timeline_over_budget_is_replanned() {
    let collaborator = Arc::new(ScriptedCollaborator::succeeding(json!({
        "tasks": [
            {"title": "Buy a guitar", "description": "", "category": "setup"}
        ],
        "timeline": {
            "total_duration_days": 90,
            "total_estimated_hours": 1,
            "hours_per_week": 40.0
        }
    })));
    let result = assembler_with(collaborator).assemble(&guitar()).await;

    // reported tasks survive, the timeline is planned for them
    assert_eq!(result.tasks.len(), 1);
    let timeline = result.timeline.unwrap();
    assert!(timeline.hours_per_week < 1.0);
    assert_eq!(timeline.weekly_schedule[0].tasks, vec!["Buy a guitar"]);
    assert_eq!(timeline.milestones.len(), 30);
}

#[test]
fn test_builder_context_applies_when_goal_has_none() {
    let assembler = PlanAssemblerBuilder::new()
        .with_user_id("user123")
        .with_user_context(UserContext {
            working_hours_per_week: 7,
            ..UserContext::for_user("user123")
        })
        .build()
        .unwrap();
    let request = assembler.plan_request(&guitar()).unwrap();

    assert!(request.prompt.contains("\"working_hours_per_week\": 7"));
}
