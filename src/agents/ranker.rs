//! LLM-driven priority ranking

use crate::agents::Agent;
use crate::llm::LLMClient;
use crate::ranking::{PriorityRanker, RuleBasedRanker};
use crate::scheduler::WorkItem;
use crate::tasks::{validate_tasks, Task};
use crate::types::{AgentType, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Asks the model for an ordering of task ids.
///
/// The reply is free text; ids are picked out of it in order of first
/// appearance. Tasks the model leaves out follow in rule-based order. If the
/// model fails or names no known id at all, the whole ranking falls back to
/// [`RuleBasedRanker`].
pub struct AgentRanker {
    llm: Arc<dyn LLMClient>,
    fallback: RuleBasedRanker,
}

impl AgentRanker {
    pub fn new(llm: Arc<dyn LLMClient>, fallback: RuleBasedRanker) -> Self {
        Self { llm, fallback }
    }

    fn build_prompt(tasks: &[Task], today: NaiveDate) -> String {
        let mut prompt = format!("Today is {}. Rank these tasks:\n", today);
        for task in tasks {
            let due = task
                .due_date
                .map(|d| format!("due {}", d))
                .unwrap_or_else(|| "no due date".to_string());
            prompt.push_str(&format!(
                "- {} | {} | {}h | {} priority | {}\n",
                task.id, task.title, task.estimated_hours, task.priority, due
            ));
        }
        prompt
    }

    /// Extract known task ids from a model reply, in order, without repeats.
    ///
    /// Ids are matched as substrings, so ids containing spaces or punctuation
    /// (`"fix login"`, `"api:v2"`) are found. A match must not be glued to a
    /// neighbouring letter, digit, `-` or `_`, and longer ids claim their text
    /// first, so `t1` is never read out of `t10`. Handles replies such as:
    /// - `"t3, t1, t2"`
    /// - numbered lists (`"1. t3\n2. t1"`)
    /// - ids wrapped in quotes or backticks
    fn parse_ordering(output: &str, known: &HashSet<&str>) -> Vec<String> {
        let mut candidates: Vec<&str> = known.iter().copied().filter(|id| !id.is_empty()).collect();
        candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut first_seen: Vec<(usize, &str)> = Vec::new();

        for id in candidates {
            let mut first = None;
            for (start, _) in output.match_indices(id) {
                let end = start + id.len();
                let overlaps = claimed.iter().any(|&(s, e)| start < e && s < end);
                if overlaps || !is_standalone(output, start, end) {
                    continue;
                }
                claimed.push((start, end));
                first.get_or_insert(start);
            }
            if let Some(start) = first {
                first_seen.push((start, id));
            }
        }

        first_seen.sort_by_key(|&(start, _)| start);
        first_seen.into_iter().map(|(_, id)| id.to_string()).collect()
    }
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !matches!(before, Some(c) if is_id_char(c)) && !matches!(after, Some(c) if is_id_char(c))
}

#[async_trait]
impl Agent for AgentRanker {
    async fn execute(&self, input: &str) -> Result<String> {
        self.llm
            .generate_with_system(&self.system_prompt(), input)
            .await
    }

    fn system_prompt(&self) -> String {
        r#"You are a task prioritization agent.
Order the tasks from most to least important, weighing priority, due dates and effort.
Respond with ONLY the task ids, comma-separated, most important first."#
            .to_string()
    }

    fn agent_type(&self) -> AgentType {
        AgentType::Ranker
    }
}

#[async_trait]
impl PriorityRanker for AgentRanker {
    async fn rank(&self, tasks: &[Task], today: NaiveDate) -> Result<Vec<WorkItem>> {
        validate_tasks(tasks)?;

        let rule_order = self.fallback.rank_now(tasks, today);
        if tasks.is_empty() {
            return Ok(rule_order);
        }

        let output = match self.execute(&Self::build_prompt(tasks, today)).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(
                    model = self.llm.model_name(),
                    "Ranking agent failed, using rule-based order: {}",
                    e
                );
                return Ok(rule_order);
            }
        };

        let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        let ordered = Self::parse_ordering(&output, &known);
        if ordered.is_empty() {
            tracing::warn!(
                model = self.llm.model_name(),
                "Ranking agent named no known task ids, using rule-based order"
            );
            return Ok(rule_order);
        }

        let titles: HashMap<&str, &str> = tasks
            .iter()
            .map(|t| (t.id.as_str(), t.title.as_str()))
            .collect();
        let mut by_id: HashMap<String, WorkItem> = rule_order
            .iter()
            .map(|item| (item.id.clone(), item.clone()))
            .collect();

        let total = tasks.len();
        let mut items = Vec::with_capacity(total);

        for (position, id) in ordered.iter().enumerate() {
            if let Some(mut item) = by_id.remove(id) {
                item.rank = (total - position) as f64;
                item.annotation = format!(
                    "{} [ranked #{} by agent]",
                    titles.get(id.as_str()).copied().unwrap_or(id.as_str()),
                    position + 1
                );
                items.push(item);
            }
        }

        // Omitted tasks keep their rule-based relative order.
        for item in rule_order {
            if let Some(mut item) = by_id.remove(&item.id) {
                item.rank = (total - items.len()) as f64;
                items.push(item);
            }
        }

        tracing::debug!(
            agent_ordered = ordered.len(),
            total,
            "Agent ranking applied"
        );
        Ok(items)
    }

    fn name(&self) -> &str {
        "agent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordering_formats() {
        let known: HashSet<&str> = ["t1", "t2", "t3"].into_iter().collect();

        assert_eq!(
            AgentRanker::parse_ordering("t3, t1, t2", &known),
            vec!["t3", "t1", "t2"]
        );
        assert_eq!(
            AgentRanker::parse_ordering("1. t2\n2. `t3`\n3. \"t1\".", &known),
            vec!["t2", "t3", "t1"]
        );
        assert_eq!(
            AgentRanker::parse_ordering("Start with t1, then t1 again, then zzz", &known),
            vec!["t1"]
        );
        assert!(AgentRanker::parse_ordering("no idea", &known).is_empty());
    }

    #[test]
    fn test_parse_ordering_ids_with_separators() {
        let known: HashSet<&str> = ["fix login", "a:b", "deploy"].into_iter().collect();

        assert_eq!(
            AgentRanker::parse_ordering("a:b, fix login, deploy", &known),
            vec!["a:b", "fix login", "deploy"]
        );
        assert_eq!(
            AgentRanker::parse_ordering("1. `deploy`\n2. \"fix login\"\n3. a:b.", &known),
            vec!["deploy", "fix login", "a:b"]
        );
    }

    #[test]
    fn test_parse_ordering_prefers_whole_ids() {
        let known: HashSet<&str> = ["t1", "t10", "login", "fix login"].into_iter().collect();

        assert_eq!(
            AgentRanker::parse_ordering("t10, fix login, t1", &known),
            vec!["t10", "fix login", "t1"]
        );
        // "t1" inside "t12" or "t1-b" is not a mention of t1
        assert!(AgentRanker::parse_ordering("t12 then t1-b", &known).is_empty());
        assert_eq!(
            AgentRanker::parse_ordering("login first, then fix login", &known),
            vec!["login", "fix login"]
        );
    }

    #[test]
    fn test_prompt_lists_every_task() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let tasks = vec![
            Task::new("a", "Alpha", 2.0),
            Task::new("b", "Beta", 1.0).with_due_date(today),
        ];
        let prompt = AgentRanker::build_prompt(&tasks, today);
        assert!(prompt.contains("- a | Alpha | 2h | medium priority | no due date"));
        assert!(prompt.contains("- b | Beta | 1h | medium priority | due 2024-01-15"));
    }
}
