//! Narrative summaries of a finished schedule
//!
//! The summarizer only reads a [`ScheduleResult`]; the scheduler never looks
//! at what comes back.

use crate::scheduler::ScheduleResult;
use crate::types::Result;
use async_trait::async_trait;

#[async_trait]
pub trait NarrativeSummarizer: Send + Sync {
    async fn summarize(&self, schedule: &ScheduleResult) -> Result<String>;

    /// Short label used in workflow step records
    fn name(&self) -> &str;
}

/// Deterministic commentary built from the summary figures
#[derive(Debug, Clone)]
pub struct TemplateSummarizer {
    capacity_hours_per_day: f64,
}

impl TemplateSummarizer {
    pub fn new(capacity_hours_per_day: f64) -> Self {
        Self {
            capacity_hours_per_day,
        }
    }

    pub fn render(&self, schedule: &ScheduleResult) -> String {
        let summary = &schedule.summary;
        if schedule.days.is_empty() {
            return "Nothing to schedule: the task list is empty.".to_string();
        }

        let mut lines = vec![format!(
            "{} task(s) totalling {:.1}h spread over {} working day(s), averaging {:.1}h per day.",
            summary.total_items, summary.total_hours, summary.total_days, summary.average_hours_per_day
        )];

        if let (Some(first), Some(last)) = (schedule.days.first(), schedule.days.last()) {
            lines.push(format!("Work runs from {} to {}.", first.date, last.date));
        }

        if let Some(busiest) = schedule
            .days
            .iter()
            .max_by(|a, b| a.total_hours.total_cmp(&b.total_hours))
        {
            lines.push(format!(
                "Busiest day is {} with {:.1}h across {} task(s).",
                busiest.date,
                busiest.total_hours,
                busiest.assignments.len()
            ));
        }

        for day in schedule.oversized_days(self.capacity_hours_per_day) {
            if let Some(assignment) = day.assignments.first() {
                lines.push(format!(
                    "Task '{}' alone needs {:.1}h on {}, more than the {:.1}h daily budget; consider splitting it.",
                    assignment.task_id, day.total_hours, day.date, self.capacity_hours_per_day
                ));
            }
        }

        let spare = summary.total_days as f64 * self.capacity_hours_per_day - summary.total_hours;
        if spare > 0.0 {
            lines.push(format!("{:.1}h of capacity remain unused.", spare));
        }

        lines.join("\n")
    }
}

#[async_trait]
impl NarrativeSummarizer for TemplateSummarizer {
    async fn summarize(&self, schedule: &ScheduleResult) -> Result<String> {
        Ok(self.render(schedule))
    }

    fn name(&self) -> &str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{schedule, NoopObserver, SchedulerSettings, WorkItem};
    use chrono::NaiveDate;

    fn plan(durations: &[f64]) -> ScheduleResult {
        let items: Vec<_> = durations
            .iter()
            .enumerate()
            .map(|(i, d)| WorkItem::new(format!("t{}", i), *d, 0.0))
            .collect();
        schedule(
            &items,
            &SchedulerSettings::default(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            &NoopObserver,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_schedule_text() {
        let text = TemplateSummarizer::new(8.0).render(&ScheduleResult::default());
        assert!(text.contains("empty"));
    }

    #[test]
    fn test_summary_mentions_figures() {
        let text = TemplateSummarizer::new(8.0).render(&plan(&[4.0, 2.0, 6.0]));
        assert!(text.contains("3 task(s) totalling 12.0h"));
        assert!(text.contains("2 working day(s)"));
        assert!(text.contains("from 2024-01-15 to 2024-01-16"));
        assert!(text.contains("4.0h of capacity remain unused"));
    }

    #[tokio::test]
    async fn test_flags_oversized_task() {
        let text = TemplateSummarizer::new(8.0)
            .summarize(&plan(&[10.0]))
            .await
            .unwrap();
        assert!(text.contains("Task 't0' alone needs 10.0h"));
    }
}
