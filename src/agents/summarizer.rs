//! LLM-driven schedule commentary

use crate::agents::Agent;
use crate::llm::LLMClient;
use crate::narrative::NarrativeSummarizer;
use crate::scheduler::ScheduleResult;
use crate::types::{AgentType, AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;

pub struct AgentSummarizer {
    llm: Arc<dyn LLMClient>,
}

impl AgentSummarizer {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    fn build_prompt(schedule: &ScheduleResult) -> Result<String> {
        let json = serde_json::to_string_pretty(schedule)
            .map_err(|e| AppError::Parse(format!("Failed to serialize schedule: {}", e)))?;

        Ok(format!(
            r#"Here is a work schedule produced by a greedy daily-capacity planner:

{}

Review it and suggest optimizations: overloaded or underused days, tasks worth
splitting or batching, and anything that looks risky. Keep it short."#,
            json
        ))
    }
}

#[async_trait]
impl Agent for AgentSummarizer {
    async fn execute(&self, input: &str) -> Result<String> {
        self.llm
            .generate_with_system(&self.system_prompt(), input)
            .await
    }

    fn system_prompt(&self) -> String {
        "You are a Planning Agent specialized in workload balancing and schedule optimization."
            .to_string()
    }

    fn agent_type(&self) -> AgentType {
        AgentType::Summarizer
    }
}

#[async_trait]
impl NarrativeSummarizer for AgentSummarizer {
    async fn summarize(&self, schedule: &ScheduleResult) -> Result<String> {
        let prompt = Self::build_prompt(schedule)?;
        self.execute(&prompt).await
    }

    fn name(&self) -> &str {
        "agent"
    }
}
