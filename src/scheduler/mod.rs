//! Daily Capacity Scheduler
//!
//! Packs an already-ranked list of work items into consecutive calendar days
//! so that no day exceeds a fixed hour budget.
//!
//! # Algorithm
//!
//! Greedy first-fit by day: items are taken strictly in input order and
//! appended to the current day until the next one no longer fits, at which
//! point the day is flushed and the item is retried on the next working day.
//! An empty day always accepts the next item, so an item larger than the
//! daily capacity sits alone on its own day instead of stalling the loop.
//!
//! # Usage
//!
//! ```ignore
//! use taskflow::scheduler::{schedule, SchedulerSettings, NoopObserver, WorkItem};
//!
//! let items = vec![
//!     WorkItem::new("write-report", 4.0, 30.0),
//!     WorkItem::new("review-pr", 2.0, 20.0),
//! ];
//! let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let result = schedule(&items, &SchedulerSettings::default(), start, &NoopObserver)?;
//! println!("{} days", result.summary.total_days);
//! ```

pub mod calendar;
pub mod observer;
pub mod packer;

pub use calendar::format_time_of_day;
pub use observer::{
    NoopObserver, RecordingObserver, ScheduleEvent, ScheduleObserver, TracingObserver,
};
pub use packer::schedule;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default per-day hour budget
pub const DEFAULT_CAPACITY_HOURS: f64 = 8.0;

/// Default wall-clock hour that offset zero maps to
pub const DEFAULT_DAY_START_HOUR: u32 = 9;

/// A unit of schedulable work, already ranked by the upstream step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Caller-supplied identifier, unique within a batch
    pub id: String,
    /// Estimated time to complete, in hours
    pub duration_hours: f64,
    /// Ordering key, higher is scheduled earlier
    pub rank: f64,
    /// Free text carried through to the output, never interpreted
    #[serde(default)]
    pub annotation: String,
}

impl WorkItem {
    pub fn new(id: impl Into<String>, duration_hours: f64, rank: f64) -> Self {
        Self {
            id: id.into(),
            duration_hours,
            rank,
            annotation: String::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = annotation.into();
        self
    }
}

/// Tunables for a single scheduling call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerSettings {
    pub capacity_hours_per_day: f64,
    pub skip_weekends: bool,
    pub day_start_hour: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            capacity_hours_per_day: DEFAULT_CAPACITY_HOURS,
            skip_weekends: true,
            day_start_hour: DEFAULT_DAY_START_HOUR,
        }
    }
}

/// One item placed on a day, with offsets measured from the day start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub task_id: String,
    pub start_offset_hours: f64,
    pub end_offset_hours: f64,
    /// Wall-clock label for the start offset, `HH:MM`
    pub start_time: String,
    /// Wall-clock label for the end offset, `HH:MM`
    pub end_time: String,
    pub annotation: String,
}

impl Assignment {
    pub fn duration_hours(&self) -> f64 {
        self.end_offset_hours - self.start_offset_hours
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub assignments: Vec<Assignment>,
    pub total_hours: f64,
}

/// Aggregate statistics, always derived from the days and the input
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_items: usize,
    pub total_hours: f64,
    pub total_days: usize,
    pub average_hours_per_day: f64,
}

impl ScheduleSummary {
    pub(crate) fn derive(items: &[WorkItem], days: &[ScheduleDay]) -> Self {
        let total_hours: f64 = items.iter().map(|item| item.duration_hours).sum();
        let total_days = days.len();
        let average_hours_per_day = if total_days == 0 {
            0.0
        } else {
            total_hours / total_days as f64
        };

        Self {
            total_items: items.len(),
            total_hours,
            total_days,
            average_hours_per_day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    pub days: Vec<ScheduleDay>,
    pub summary: ScheduleSummary,
}

impl ScheduleResult {
    /// Iterate every assignment across all days, in schedule order
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.days.iter().flat_map(|day| day.assignments.iter())
    }

    /// Days whose total exceeds `capacity`, which only happens for a lone oversized item
    pub fn oversized_days(&self, capacity: f64) -> Vec<&ScheduleDay> {
        self.days
            .iter()
            .filter(|day| day.total_hours > capacity + packer::CAPACITY_EPSILON)
            .collect()
    }
}
