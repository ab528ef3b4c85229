//! Workflow Engine
//!
//! Runs the task planning pipeline: priority ranking, daily capacity
//! scheduling, then an optional narrative summary.

use crate::agents::{AgentRanker, AgentSummarizer};
use crate::llm::LLMClient;
use crate::narrative::{NarrativeSummarizer, TemplateSummarizer};
use crate::ranking::{PriorityRanker, RankingStrategy, RuleBasedRanker};
use crate::scheduler::{schedule, ScheduleObserver, ScheduleResult, SchedulerSettings};
use crate::tasks::{validate_tasks, Task};
use crate::types::Result;
use crate::utils::toml_config::TaskflowConfig;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Output from a workflow execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowOutput {
    /// Identifier of this run, for correlating log lines
    pub run_id: Uuid,
    /// The packed schedule
    pub schedule: ScheduleResult,
    /// Commentary from the summarizer, if one ran and succeeded
    pub narrative: Option<String>,
    /// Number of steps executed
    pub steps_executed: usize,
    /// Detailed path showing each step
    pub reasoning_path: Vec<WorkflowStep>,
}

/// A single step in the workflow execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Which stage ran ("rank", "schedule", "narrate")
    pub step_name: String,
    /// Human-readable outcome of the step
    pub detail: String,
    /// Unix timestamp when this step was executed
    pub timestamp: i64,
    /// Duration of this step in milliseconds
    pub duration_ms: u64,
}

/// Linear rank → schedule → narrate pipeline
pub struct TaskPlanningWorkflow {
    ranker: Arc<dyn PriorityRanker>,
    summarizer: Option<Arc<dyn NarrativeSummarizer>>,
    observer: Arc<dyn ScheduleObserver>,
    settings: SchedulerSettings,
}

impl TaskPlanningWorkflow {
    /// Create a new workflow
    pub fn new(
        ranker: Arc<dyn PriorityRanker>,
        observer: Arc<dyn ScheduleObserver>,
        settings: SchedulerSettings,
    ) -> Self {
        Self {
            ranker,
            summarizer: None,
            observer,
            settings,
        }
    }

    /// Build the workflow described by `config`.
    ///
    /// Agent-backed steps are used only when `llm` is provided; without a
    /// client the rule-based ranker and the template summarizer stand in.
    pub fn from_config(
        config: &TaskflowConfig,
        llm: Option<Arc<dyn LLMClient>>,
        observer: Arc<dyn ScheduleObserver>,
    ) -> Self {
        let rules = RuleBasedRanker::new(config.ranking.due_soon_days);

        let ranker: Arc<dyn PriorityRanker> = match (config.ranking.strategy, &llm) {
            (RankingStrategy::Agent, Some(client)) => {
                Arc::new(AgentRanker::new(Arc::clone(client), rules))
            }
            (RankingStrategy::Agent, None) => {
                tracing::warn!("Agent ranking configured but no LLM client available, using rules");
                Arc::new(rules)
            }
            (RankingStrategy::Rules, _) => Arc::new(rules),
        };

        let settings = config.scheduler_settings();
        let workflow = Self::new(ranker, observer, settings);

        if !config.narrative.enabled {
            return workflow;
        }

        let summarizer: Arc<dyn NarrativeSummarizer> = match llm {
            Some(client) => Arc::new(AgentSummarizer::new(client)),
            None => Arc::new(TemplateSummarizer::new(settings.capacity_hours_per_day)),
        };
        workflow.with_summarizer(summarizer)
    }

    /// Attach a narrative step after scheduling
    pub fn with_summarizer(mut self, summarizer: Arc<dyn NarrativeSummarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn settings(&self) -> &SchedulerSettings {
        &self.settings
    }

    /// Execute the workflow
    ///
    /// # Arguments
    ///
    /// * `tasks` - The tasks to plan
    /// * `start_date` - First calendar day work may be placed on; also the
    ///   reference date for due-date urgency
    ///
    /// # Returns
    ///
    /// A `WorkflowOutput` with the schedule and the step trace. Malformed
    /// tasks, ranking and scheduling errors abort the run; a failing
    /// summarizer only leaves `narrative` empty.
    pub async fn execute(&self, tasks: &[Task], start_date: NaiveDate) -> Result<WorkflowOutput> {
        // Checked before any ranker runs so every strategy sees the same batch.
        validate_tasks(tasks)?;

        let run_id = Uuid::new_v4();
        let mut steps = Vec::new();

        tracing::info!(%run_id, tasks = tasks.len(), %start_date, "Starting planning workflow");

        // Step 1: rank
        let step_start = Instant::now();
        let timestamp = Utc::now().timestamp();
        let items = self.ranker.rank(tasks, start_date).await?;
        steps.push(WorkflowStep {
            step_name: "rank".to_string(),
            detail: format!("{} task(s) ranked by {}", items.len(), self.ranker.name()),
            timestamp,
            duration_ms: step_start.elapsed().as_millis() as u64,
        });

        // Step 2: schedule
        let step_start = Instant::now();
        let timestamp = Utc::now().timestamp();
        let result = schedule(&items, &self.settings, start_date, self.observer.as_ref())?;
        steps.push(WorkflowStep {
            step_name: "schedule".to_string(),
            detail: format!(
                "{} item(s) packed into {} day(s)",
                result.summary.total_items, result.summary.total_days
            ),
            timestamp,
            duration_ms: step_start.elapsed().as_millis() as u64,
        });

        // Step 3: narrate
        let mut narrative = None;
        if let Some(ref summarizer) = self.summarizer {
            let step_start = Instant::now();
            let timestamp = Utc::now().timestamp();
            let detail = match summarizer.summarize(&result).await {
                Ok(text) => {
                    narrative = Some(text);
                    format!("summary written by {}", summarizer.name())
                }
                Err(e) => {
                    tracing::warn!(%run_id, "Narrative step failed, continuing without it: {}", e);
                    format!("{} summarizer failed: {}", summarizer.name(), e)
                }
            };
            steps.push(WorkflowStep {
                step_name: "narrate".to_string(),
                detail,
                timestamp,
                duration_ms: step_start.elapsed().as_millis() as u64,
            });
        }

        tracing::info!(%run_id, steps = steps.len(), "Planning workflow finished");

        Ok(WorkflowOutput {
            run_id,
            schedule: result,
            narrative,
            steps_executed: steps.len(),
            reasoning_path: steps,
        })
    }
}
