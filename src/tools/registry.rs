//! Name-keyed registry of tools an agent may call

use crate::scheduler::SchedulerSettings;
use crate::tools::schedule::ScheduleTool;
use crate::types::{AppError, Result, ToolDefinition};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A callable capability with a JSON schema for its arguments
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Value;
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// Tools by name. Definitions are listed in name order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `schedule_tasks`, bound to `settings`
    pub fn planning(settings: SchedulerSettings) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ScheduleTool::new(settings)));
        registry
    }

    /// Add `tool`, replacing any tool already registered under its name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        if self.tools.insert(tool.name().to_string(), tool.clone()).is_some() {
            tracing::debug!(tool = tool.name(), "Replaced registered tool");
        }
    }

    /// Definitions to advertise to a model
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect()
    }

    pub async fn execute(&self, name: &str, args: Value) -> Result<Value> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Tool not found: {}", name)))?;
        tracing::debug!(tool = name, "Executing tool");
        tool.execute(args).await
    }
}
