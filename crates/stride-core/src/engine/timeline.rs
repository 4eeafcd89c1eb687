//! Timeline planning: converts a task list and timeframe into a dated
//! weekly schedule with milestones.
//!
//! Two milestone cadences exist side by side. The
//! [`MilestoneCadence::Monthly`] cadence starts at day 0 and is used on the
//! collaborator path; the [`MilestoneCadence::Checkpoint`] cadence starts
//! one interval in and is used by the local fallback. A single call never
//! mixes them.

use jiff::{SignedDuration, Timestamp};

pub use crate::models::MAX_HOURS_PER_WEEK;
use crate::models::{Milestone, TaskRecord, TimelinePlan, WeekEntry, REVIEW_FOCUS};

/// Days assumed when a timeframe names no recognizable unit.
pub const DEFAULT_TIMEFRAME_DAYS: u32 = 30;

/// Longest timeframe honoured, in days (100 years).
pub const MAX_TIMEFRAME_DAYS: u32 = 36_500;

/// Number of tasks shown per week in the sliding schedule window.
const WEEK_WINDOW: usize = 2;

/// Milestone spacing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MilestoneCadence {
    /// Roughly one milestone per 30th of the timeframe, starting today
    #[default]
    Monthly,
    /// Up to four checkpoints, at least a week apart, starting one interval in
    Checkpoint,
}

impl MilestoneCadence {
    /// Spacing between milestones in days.
    pub fn interval(self, total_days: u32) -> u32 {
        match self {
            MilestoneCadence::Monthly => (total_days / 30).max(1),
            MilestoneCadence::Checkpoint => (total_days / 4).max(7),
        }
    }

    /// Day offsets at which milestones fall.
    pub fn offsets(self, total_days: u32) -> Vec<u32> {
        let interval = self.interval(total_days);
        let step = interval as usize;
        match self {
            MilestoneCadence::Monthly => (0..total_days).step_by(step).collect(),
            MilestoneCadence::Checkpoint => (interval..=total_days).step_by(step).collect(),
        }
    }
}

/// Parses a natural-language timeframe into days.
///
/// The first whitespace-separated token is the count when it is all digits,
/// otherwise the count is 1, so "3-months" means one month. The unit is
/// found anywhere in the text: "week" → 7, "month" → 30, "year" → 365 days
/// per count. Anything else is treated as [`DEFAULT_TIMEFRAME_DAYS`].
///
/// ```rust
/// use stride_core::engine::parse_timeframe_days;
///
/// assert_eq!(parse_timeframe_days("3 months"), 90);
/// assert_eq!(parse_timeframe_days("3-months"), 30);
/// assert_eq!(parse_timeframe_days("a few weeks"), 7);
/// assert_eq!(parse_timeframe_days("soon"), 30);
/// ```
pub fn parse_timeframe_days(timeframe: &str) -> u32 {
    let lowered = timeframe.to_lowercase();

    let unit_days = if lowered.contains("week") {
        7
    } else if lowered.contains("month") {
        30
    } else if lowered.contains("year") {
        365
    } else {
        return DEFAULT_TIMEFRAME_DAYS;
    };

    let count = lowered
        .split_whitespace()
        .next()
        .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse::<u32>().ok())
        .unwrap_or(1);

    count
        .saturating_mul(unit_days)
        .clamp(1, MAX_TIMEFRAME_DAYS)
}

/// Builds [`TimelinePlan`]s relative to a fixed "now".
#[derive(Debug, Clone, Copy)]
pub struct TimelinePlanner {
    now: Timestamp,
}

impl TimelinePlanner {
    /// Creates a planner anchored at `now`; repeated calls with the same
    /// inputs produce identical plans.
    pub fn new(now: Timestamp) -> Self {
        Self { now }
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Plans with the [`MilestoneCadence::Monthly`] cadence.
    pub fn plan(&self, tasks: &[TaskRecord], timeframe: &str) -> TimelinePlan {
        self.plan_with_cadence(tasks, timeframe, MilestoneCadence::Monthly)
    }

    /// Plans with an explicit milestone cadence.
    pub fn plan_with_cadence(
        &self,
        tasks: &[TaskRecord],
        timeframe: &str,
        cadence: MilestoneCadence,
    ) -> TimelinePlan {
        let total_days = parse_timeframe_days(timeframe);
        let total_hours = tasks
            .iter()
            .map(TaskRecord::effort_hours)
            .fold(0u32, u32::saturating_add);

        TimelinePlan {
            total_duration_days: total_days,
            total_estimated_hours: total_hours,
            hours_per_week: weekly_budget(total_hours, total_days),
            weekly_schedule: self.weekly_schedule(tasks, total_days),
            milestones: self.milestones(total_days, cadence),
        }
    }

    fn weekly_schedule(&self, tasks: &[TaskRecord], total_days: u32) -> Vec<WeekEntry> {
        (0..total_days / 7)
            .map(|week| {
                let start = (week as usize).min(tasks.len());
                let end = (start + WEEK_WINDOW).min(tasks.len());
                let window = &tasks[start..end];

                WeekEntry {
                    week: week + 1,
                    start_date: self.offset_days(week * 7),
                    tasks: window.iter().map(|task| task.title.clone()).collect(),
                    focus_area: window
                        .first()
                        .map(|task| task.category.as_str())
                        .unwrap_or(REVIEW_FOCUS)
                        .to_string(),
                }
            })
            .collect()
    }

    fn milestones(&self, total_days: u32, cadence: MilestoneCadence) -> Vec<Milestone> {
        let interval = cadence.interval(total_days);

        cadence
            .offsets(total_days)
            .into_iter()
            .map(|day| match cadence {
                MilestoneCadence::Monthly => Milestone {
                    date: self.offset_days(day),
                    title: format!("Milestone {}", day / interval + 1),
                    description: "Review progress and adjust plan".to_string(),
                },
                MilestoneCadence::Checkpoint => Milestone {
                    date: self.offset_days(day),
                    title: format!("Milestone {}", day / interval),
                    description: format!("Review progress and adjust plan (Day {day})"),
                },
            })
            .collect()
    }

    fn offset_days(&self, days: u32) -> Timestamp {
        self.now
            .checked_add(SignedDuration::from_hours(i64::from(days) * 24))
            .unwrap_or(Timestamp::MAX)
    }
}

/// Weekly hour budget: total effort spread over the timeframe, capped at
/// [`MAX_HOURS_PER_WEEK`]. Timeframes shorter than a week count as one week.
pub fn weekly_budget(total_hours: u32, total_days: u32) -> f64 {
    let weeks = f64::from(total_days.max(7)) / 7.0;
    (f64::from(total_hours) / weeks).min(MAX_HOURS_PER_WEEK)
}
