//! Plan assembly: the single entry point that turns a [`Goal`] into a
//! [`PlanResult`].
//!
//! Two paths exist:
//!
//! ```text
//!                  ┌──────────────────────┐  ok   ┌──────────────────────┐
//!  Goal ──▶ valid? │ Collaborator         │──────▶│ merge, fill gaps     │──▶ PlanResult
//!                  │ generate ▶ run       │       │ from local engine    │    fallback=false
//!                  └──────────────────────┘       └──────────────────────┘
//!                             │ error / none configured
//!                             ▼
//!                  ┌──────────────────────┐
//!                  │ Local engine         │──────────────────────────────────▶ PlanResult
//!                  └──────────────────────┘                                    fallback=true
//! ```
//!
//! Invalid input never reaches either path; it produces a failure result
//! with `success = false`. Assembly itself never returns `Err`.
//!
//! # Usage
//!
//! ```rust
//! use stride_core::{models::Goal, PlanAssemblerBuilder};
//!
//! let assembler = PlanAssemblerBuilder::new().with_user_id("user123").build()?;
//! let result = assembler.assemble_locally(&Goal::new("Learn to play guitar", "3 months"));
//!
//! assert!(result.success);
//! assert!(result.fallback);
//! assert_eq!(result.timeline.unwrap().total_duration_days, 90);
//! # Ok::<(), stride_core::StrideError>(())
//! ```

use std::{fmt, sync::Arc};

use jiff::Timestamp;
use log::{debug, info, warn};

pub mod builder;
pub mod collaborator;
pub mod prompt;

#[cfg(test)]
mod tests;

pub use builder::{PlanAssemblerBuilder, DEFAULT_USER_ID};
pub use collaborator::{
    Attribution, Collaborator, CollaboratorPlan, PlanRequest, RunOutput, ATTRIBUTION_PLAN,
};
pub use prompt::build_prompt;

use crate::{
    engine::{
        AdvisoryGenerator, ComplexityAnalyzer, GoalClassifier, MilestoneCadence, TaskSynthesizer,
        TimelinePlanner,
    },
    error::Result,
    models::{
        validate_dependencies, validate_timeline, Analysis, ComplexityProfile, Goal, PlanResult,
        TaskRecord, TimelinePlan, UserContext,
    },
};

/// Coordinates the engine components and the optional collaborator.
///
/// Create instances with [`PlanAssemblerBuilder`].
#[derive(Clone)]
pub struct PlanAssembler {
    user_id: String,
    user_context: Option<UserContext>,
    attribution: bool,
    fixed_now: Option<Timestamp>,
    collaborator: Option<Arc<dyn Collaborator>>,
    classifier: GoalClassifier,
    analyzer: ComplexityAnalyzer,
    synthesizer: TaskSynthesizer,
    advisor: AdvisoryGenerator,
}

impl PlanAssembler {
    pub(crate) fn new(
        user_id: String,
        user_context: Option<UserContext>,
        attribution: bool,
        fixed_now: Option<Timestamp>,
        collaborator: Option<Arc<dyn Collaborator>>,
    ) -> Self {
        Self {
            user_id,
            user_context,
            attribution,
            fixed_now,
            collaborator,
            classifier: GoalClassifier::new(),
            analyzer: ComplexityAnalyzer::new(),
            synthesizer: TaskSynthesizer::new(),
            advisor: AdvisoryGenerator::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn has_collaborator(&self) -> bool {
        self.collaborator.is_some()
    }

    /// Assembles a plan through the collaborator when one is configured,
    /// locally otherwise.
    pub async fn assemble(&self, goal: &Goal) -> PlanResult {
        if self.has_collaborator() {
            self.assemble_via_collaborator(goal).await
        } else {
            self.assemble_locally(goal)
        }
    }

    /// Runs the deterministic local engine end to end.
    pub fn assemble_locally(&self, goal: &Goal) -> PlanResult {
        let now = self.now();
        self.local_plan(goal, now).unwrap_or_else(|e| {
            debug!("local assembly rejected goal: {e}");
            PlanResult::failure(e.to_string(), now)
        })
    }

    /// Asks the collaborator for a plan, falling back to the local engine on
    /// any collaborator failure.
    pub async fn assemble_via_collaborator(&self, goal: &Goal) -> PlanResult {
        let now = self.now();
        if let Err(e) = goal.validate() {
            return PlanResult::failure(e.to_string(), now);
        }

        let Some(collaborator) = self.collaborator.as_deref() else {
            warn!("No collaborator configured, using local analysis");
            return self.assemble_locally(goal);
        };

        match self.collaborate(collaborator, goal, now).await {
            Ok(result) => result,
            Err(e) => {
                warn!("{e}; falling back to local analysis");
                self.assemble_locally(goal)
            }
        }
    }

    /// Builds the request the collaborator receives for `goal`.
    pub fn plan_request(&self, goal: &Goal) -> Result<PlanRequest> {
        let context = self.context_for(goal);
        let attribution = self.attribution.then(|| {
            Attribution::new(
                self.user_id.clone(),
                self.classifier.classify(&goal.description),
                goal.timeframe.clone(),
            )
        });

        Ok(PlanRequest {
            prompt: build_prompt(goal, &context)?,
            attribution,
        })
    }

    fn local_plan(&self, goal: &Goal, now: Timestamp) -> Result<PlanResult> {
        goal.validate()?;

        let profile = self.analyzer.analyze(&goal.description, &goal.timeframe)?;
        let tasks = self
            .synthesizer
            .synthesize(&goal.description, &goal.timeframe, &profile)?;
        let timeline = TimelinePlanner::new(now).plan_with_cadence(
            &tasks,
            &goal.timeframe,
            MilestoneCadence::Checkpoint,
        );

        info!(
            "Assembled local plan: {} tasks over {} days",
            tasks.len(),
            timeline.total_duration_days
        );

        Ok(PlanResult {
            success: true,
            fallback: true,
            user_id: Some(self.user_id.clone()),
            plan_id: None,
            run_id: None,
            analysis: Some(profile.to_analysis()),
            tasks,
            timeline: Some(timeline),
            success_tips: self.advisor.tips(&goal.description),
            potential_obstacles: self.advisor.obstacles(&goal.description),
            error: None,
            processed_at: now,
        })
    }

    async fn collaborate(
        &self,
        collaborator: &dyn Collaborator,
        goal: &Goal,
        now: Timestamp,
    ) -> Result<PlanResult> {
        let request = self.plan_request(goal)?;

        debug!("Generating plan with collaborator");
        let plan = collaborator.generate_plan(&request).await?;
        debug!("Executing plan {:?}", plan.id);
        let run = collaborator.run_plan(&plan).await?;
        info!("Collaborator run {:?} completed", run.id);

        let profile = self.analyzer.analyze(&goal.description, &goal.timeframe)?;
        let analysis = merge_analysis(run.analysis(), &profile);
        let (tasks, tasks_reported) = match accept_tasks(run.tasks()) {
            Some(tasks) => (tasks, true),
            None => (
                self.synthesizer
                    .synthesize(&goal.description, &goal.timeframe, &profile)?,
                false,
            ),
        };
        let timeline = merge_timeline(run.timeline(), tasks_reported, &tasks, &goal.timeframe, now);

        Ok(PlanResult {
            success: true,
            fallback: false,
            user_id: Some(self.user_id.clone()),
            plan_id: plan.id,
            run_id: run.id,
            analysis: Some(analysis),
            tasks,
            timeline: Some(timeline),
            success_tips: self.advisor.tips(&goal.description),
            potential_obstacles: self.advisor.obstacles(&goal.description),
            error: None,
            processed_at: now,
        })
    }

    fn context_for(&self, goal: &Goal) -> UserContext {
        goal.user_context
            .clone()
            .or_else(|| self.user_context.clone())
            .unwrap_or_else(|| UserContext::for_user(self.user_id.clone()))
    }

    fn now(&self) -> Timestamp {
        self.fixed_now.unwrap_or_else(Timestamp::now)
    }
}

impl fmt::Debug for PlanAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanAssembler")
            .field("user_id", &self.user_id)
            .field("attribution", &self.attribution)
            .field("fixed_now", &self.fixed_now)
            .field("collaborator", &self.collaborator.is_some())
            .finish_non_exhaustive()
    }
}

/// Keeps the reported analysis unless it is missing or its feasibility is
/// not a probability.
fn merge_analysis(reported: Option<Analysis>, profile: &ComplexityProfile) -> Analysis {
    match reported {
        Some(analysis) if analysis.has_valid_feasibility() => return analysis,
        Some(analysis) => warn!(
            "Discarding collaborator analysis: feasibility {} is outside [0, 1]",
            analysis.feasibility_score
        ),
        None => debug!("Collaborator reported no analysis, using local analysis"),
    }
    profile.to_analysis()
}

/// Returns the reported tasks when they form a valid list.
fn accept_tasks(reported: Vec<TaskRecord>) -> Option<Vec<TaskRecord>> {
    if reported.is_empty() {
        debug!("Collaborator reported no tasks, synthesizing locally");
        return None;
    }
    match validate_dependencies(&reported) {
        Ok(()) => Some(reported),
        Err(issue) => {
            warn!("Discarding collaborator tasks: {issue}");
            None
        }
    }
}

/// Keeps the reported timeline only when it was planned for the kept tasks
/// and stays within the planning limits; otherwise plans monthly.
fn merge_timeline(
    reported: Option<TimelinePlan>,
    tasks_reported: bool,
    tasks: &[TaskRecord],
    timeframe: &str,
    now: Timestamp,
) -> TimelinePlan {
    match reported {
        Some(_) if !tasks_reported => {
            warn!("Discarding collaborator timeline: its tasks were replaced");
        }
        Some(timeline) => match validate_timeline(&timeline, tasks) {
            Ok(()) => return timeline,
            Err(issue) => warn!("Discarding collaborator timeline: {issue}"),
        },
        None => debug!("Collaborator reported no timeline, planning locally"),
    }
    TimelinePlanner::new(now).plan(tasks, timeframe)
}
