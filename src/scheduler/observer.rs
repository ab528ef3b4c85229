//! Hooks invoked at the scheduler's flush and completion boundaries
//!
//! The packer never logs on its own. Callers pick where progress goes by
//! passing an observer: [`TracingObserver`] forwards to `tracing`,
//! [`RecordingObserver`] keeps an in-memory trace and [`NoopObserver`]
//! discards everything.

use super::{ScheduleDay, ScheduleSummary};
use chrono::NaiveDate;
use parking_lot::Mutex;

pub trait ScheduleObserver: Send + Sync {
    /// Called once per emitted day, in chronological order
    fn on_day_scheduled(&self, _day: &ScheduleDay) {}

    /// Called once after the last day has been emitted
    fn on_schedule_complete(&self, _summary: &ScheduleSummary) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}

/// Emits a structured `tracing` event per day and on completion
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScheduleObserver for TracingObserver {
    fn on_day_scheduled(&self, day: &ScheduleDay) {
        tracing::debug!(
            date = %day.date,
            items = day.assignments.len(),
            hours = day.total_hours,
            "Scheduled day"
        );
    }

    fn on_schedule_complete(&self, summary: &ScheduleSummary) {
        tracing::info!(
            total_items = summary.total_items,
            total_days = summary.total_days,
            total_hours = summary.total_hours,
            average_hours_per_day = summary.average_hours_per_day,
            "Schedule complete"
        );
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleEvent {
    DayScheduled {
        date: NaiveDate,
        items: usize,
        total_hours: f64,
    },
    Completed(ScheduleSummary),
}

/// Collects every event it sees, for inspection after the call returns
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ScheduleEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ScheduleEvent> {
        self.events.lock().clone()
    }
}

impl ScheduleObserver for RecordingObserver {
    fn on_day_scheduled(&self, day: &ScheduleDay) {
        self.events.lock().push(ScheduleEvent::DayScheduled {
            date: day.date,
            items: day.assignments.len(),
            total_hours: day.total_hours,
        });
    }

    fn on_schedule_complete(&self, summary: &ScheduleSummary) {
        self.events.lock().push(ScheduleEvent::Completed(*summary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        let day = ScheduleDay {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            assignments: vec![],
            total_hours: 0.0,
        };
        observer.on_day_scheduled(&day);
        observer.on_schedule_complete(&ScheduleSummary::default());

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ScheduleEvent::DayScheduled { items: 0, .. }));
        assert!(matches!(events[1], ScheduleEvent::Completed(_)));
    }
}
