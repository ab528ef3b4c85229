//! Priority ranking
//!
//! Turns user [`Task`]s into rank-ordered [`WorkItem`]s for the scheduler.
//! Two strategies are available:
//!
//! - [`RuleBasedRanker`] - deterministic score from priority and due date
//! - [`AgentRanker`](crate::agents::AgentRanker) - asks an LLM for the order,
//!   falling back to the rules when the model is unavailable

pub mod rules;

pub use rules::RuleBasedRanker;

use crate::scheduler::WorkItem;
use crate::tasks::Task;
use crate::types::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait PriorityRanker: Send + Sync {
    /// Rank `tasks` as of `today`.
    ///
    /// The returned items are sorted by descending rank, ties kept in input order.
    async fn rank(&self, tasks: &[Task], today: NaiveDate) -> Result<Vec<WorkItem>>;

    /// Short label used in workflow step records
    fn name(&self) -> &str;
}

/// Which ranker the workflow should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingStrategy {
    #[default]
    Rules,
    Agent,
}

/// Stable sort by descending rank
pub fn sort_by_rank(items: &mut [WorkItem]) {
    items.sort_by(|a, b| b.rank.total_cmp(&a.rank));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_rank_is_stable() {
        let mut items = vec![
            WorkItem::new("a", 1.0, 1.0),
            WorkItem::new("b", 1.0, 5.0),
            WorkItem::new("c", 1.0, 1.0),
            WorkItem::new("d", 1.0, 5.0),
        ];
        sort_by_rank(&mut items);

        let order: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_strategy_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: RankingStrategy,
        }
        let parsed: Wrapper = toml::from_str(r#"strategy = "agent""#).unwrap();
        assert_eq!(parsed.strategy, RankingStrategy::Agent);
    }
}
