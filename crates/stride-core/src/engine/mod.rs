//! The goal-classification and plan-synthesis engine.
//!
//! Data flows strictly downstream:
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌─────────────┐   ┌────────────┐
//! │ Classifier │──▶│  Analyzer  │──▶│ Synthesizer │──▶│  Timeline  │
//! │ (category) │   │ (profile)  │   │   (tasks)   │   │  Planner   │
//! └────────────┘   └────────────┘   └─────────────┘   └────────────┘
//!        goal text ───────────────────▶ Advisory (tips, obstacles)
//! ```
//!
//! Every component is a pure transformation over immutable inputs. Keyword
//! heuristics are expressed as ordered tables ([`CATEGORY_RULES`],
//! [`COMPLEXITY_RULES`], [`TASK_BRANCHES`]) so precedence can be read and
//! tested directly.
//!
//! # Example
//!
//! ```rust
//! use jiff::Timestamp;
//! use stride_core::engine::{ComplexityAnalyzer, TaskSynthesizer, TimelinePlanner};
//!
//! let profile = ComplexityAnalyzer::new().analyze("Learn to play guitar", "3 months")?;
//! let tasks = TaskSynthesizer::new().synthesize("Learn to play guitar", "3 months", &profile)?;
//! let timeline = TimelinePlanner::new(Timestamp::now()).plan(&tasks, "3 months");
//!
//! assert_eq!(profile.estimated_duration_weeks, 12);
//! assert_eq!(tasks[1].title, "Find learning resources and courses");
//! assert_eq!(timeline.total_duration_days, 90);
//! # Ok::<(), stride_core::StrideError>(())
//! ```

pub mod advisory;
pub mod analyzer;
pub mod classifier;
pub mod keywords;
pub mod synthesizer;
pub mod timeline;


pub use advisory::AdvisoryGenerator;
pub use analyzer::{ComplexityAnalyzer, ComplexityRule, Trigger, COMPLEXITY_RULES};
pub use classifier::{GoalClassifier, CATEGORY_RULES};
pub use keywords::KeywordSet;
pub use synthesizer::{Effort, TaskBranch, TaskSynthesizer, TaskTemplate, TASK_BRANCHES};
pub use timeline::{
    parse_timeframe_days, weekly_budget, MilestoneCadence, TimelinePlanner, MAX_HOURS_PER_WEEK,
};
