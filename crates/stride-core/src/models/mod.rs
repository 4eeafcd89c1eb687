//! Data models for goals, complexity profiles, tasks and timelines.
//!
//! Every model here is a plain value: created once by the engine, serialized
//! into the result, then dropped. Display implementations live in
//! [`crate::display::models`] so presentation stays out of the data types.
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{Goal, UserContext};
//!
//! let goal = Goal::new("Learn to play guitar", "3 months")
//!     .with_user_context(UserContext::for_user("user123"));
//! assert!(goal.validate().is_ok());
//! assert_eq!(goal.user_context.unwrap().working_hours_per_week, 20);
//! ```

pub mod goal;
pub mod kinds;
pub mod profile;
pub mod result;
pub mod task;
pub mod timeline;


pub use goal::{Goal, UserContext};
pub use kinds::{Difficulty, GoalCategory, Priority, TaskCategory, TimeInvestment};
pub use profile::{Analysis, ComplexityProfile};
pub use result::{Obstacle, PlanResult};
pub use task::{validate_dependencies, DependencyIssue, TaskRecord};
pub use timeline::{
    validate_timeline, Milestone, TimelineIssue, TimelinePlan, WeekEntry, MAX_HOURS_PER_WEEK,
    REVIEW_FOCUS,
};
