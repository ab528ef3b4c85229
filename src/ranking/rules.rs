//! Deterministic ranking from priority and due date

use super::{sort_by_rank, PriorityRanker};
use crate::scheduler::WorkItem;
use crate::tasks::Task;
use crate::types::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

const OVERDUE_BONUS: f64 = 15.0;
const IMMINENT_BONUS: f64 = 10.0;
const DUE_SOON_BONUS: f64 = 6.0;
const THIS_WEEK_BONUS: f64 = 3.0;

/// Scores each task as `priority weight * 10 + urgency bonus`.
///
/// | Due date                    | Bonus |
/// |-----------------------------|-------|
/// | already passed              | +15   |
/// | today or tomorrow           | +10   |
/// | within `due_soon_days`      | +6    |
/// | within seven days           | +3    |
#[derive(Debug, Clone)]
pub struct RuleBasedRanker {
    due_soon_days: i64,
}

impl Default for RuleBasedRanker {
    fn default() -> Self {
        Self::new(3)
    }
}

impl RuleBasedRanker {
    pub fn new(due_soon_days: u32) -> Self {
        Self {
            due_soon_days: due_soon_days as i64,
        }
    }

    /// Score one task and describe why
    pub fn score(&self, task: &Task, today: NaiveDate) -> (f64, Vec<String>) {
        let mut score = task.priority.weight() * 10.0;
        let mut reasons = vec![format!("{} priority", task.priority)];

        if let Some(due) = task.due_date {
            let days_left = (due - today).num_days();
            let (bonus, reason) = match days_left {
                d if d < 0 => (OVERDUE_BONUS, format!("overdue by {} day(s)", -d)),
                0 => (IMMINENT_BONUS, "due today".to_string()),
                1 => (IMMINENT_BONUS, "due tomorrow".to_string()),
                d if d <= self.due_soon_days => (DUE_SOON_BONUS, format!("due in {} days", d)),
                d if d <= 7 => (THIS_WEEK_BONUS, format!("due in {} days", d)),
                d => (0.0, format!("due in {} days", d)),
            };
            score += bonus;
            reasons.push(reason);
        }

        (score, reasons)
    }

    /// Synchronous ranking, shared with the agent ranker's fallback path
    pub fn rank_now(&self, tasks: &[Task], today: NaiveDate) -> Vec<WorkItem> {
        let mut items: Vec<WorkItem> = tasks
            .iter()
            .map(|task| {
                let (score, reasons) = self.score(task, today);
                WorkItem::new(task.id.clone(), task.estimated_hours, score)
                    .with_annotation(format!("{} [{}]", task.title, reasons.join("; ")))
            })
            .collect();

        sort_by_rank(&mut items);
        items
    }
}

#[async_trait]
impl PriorityRanker for RuleBasedRanker {
    async fn rank(&self, tasks: &[Task], today: NaiveDate) -> Result<Vec<WorkItem>> {
        Ok(self.rank_now(tasks, today))
    }

    fn name(&self) -> &str {
        "rules"
    }
}
