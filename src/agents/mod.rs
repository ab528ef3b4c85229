//! LLM-backed agents for the planning workflow
//!
//! - [`AgentRanker`] - orders tasks by asking the model, with rule-based fallback
//! - [`AgentSummarizer`] - writes optimization commentary for a schedule

pub mod ranker;
pub mod summarizer;

use crate::types::{AgentType, Result};
use async_trait::async_trait;

pub use ranker::AgentRanker;
pub use summarizer::AgentSummarizer;

/// Base trait for all agents
#[async_trait]
pub trait Agent: Send + Sync {
    /// Execute the agent with given input
    async fn execute(&self, input: &str) -> Result<String>;

    /// Get the agent's system prompt
    fn system_prompt(&self) -> String;

    /// Get the agent type
    fn agent_type(&self) -> AgentType;
}
