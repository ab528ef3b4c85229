//! # taskflow
//!
//! Ranks a task list and packs it into working days under a fixed daily
//! hour budget.
//!
//! ## Overview
//!
//! taskflow can be used in two ways:
//!
//! 1. **As a CLI** - Run the `taskflow` binary against a JSON or CSV task file
//! 2. **As a library** - Call the scheduler or the planning workflow directly
//!
//! ### Scheduling ranked items
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskflow::scheduler::{schedule, NoopObserver, SchedulerSettings, WorkItem};
//!
//! let items = vec![
//!     WorkItem::new("bug", 3.0, 9.0),
//!     WorkItem::new("docs", 6.0, 2.0),
//! ];
//! let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!
//! let result = schedule(&items, &SchedulerSettings::default(), monday, &NoopObserver).unwrap();
//! assert_eq!(result.summary.total_days, 2);
//! assert_eq!(result.days[0].assignments[0].start_time, "09:00");
//! ```
//!
//! ### Running the full workflow
//!
//! ```rust,ignore
//! use taskflow::{TaskPlanningWorkflow, TaskflowConfig};
//! use taskflow::scheduler::TracingObserver;
//! use std::sync::Arc;
//!
//! let config = TaskflowConfig::load_or_default("taskflow.toml")?;
//! let workflow = TaskPlanningWorkflow::from_config(&config, None, Arc::new(TracingObserver));
//! let output = workflow.execute(&tasks, start_date).await?;
//! ```
//!
//! ## Modules
//!
//! - [`scheduler`] - Greedy first-fit daily capacity scheduler
//! - [`tasks`] - Task model and JSON/CSV loading
//! - [`ranking`] - Priority rankers that turn tasks into ranked work items
//! - [`narrative`] - Schedule summaries
//! - [`agents`] - LLM-backed ranker and summarizer
//! - [`tools`] - Tool definitions and registry
//! - [`workflows`] - Rank, schedule and narrate pipeline
//! - [`types`] - Common types and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// LLM-backed ranking and summarizing agents.
pub mod agents;
/// Command-line interface for the `taskflow` binary.
pub mod cli;
/// LLM client abstraction.
pub mod llm;
/// Schedule summaries.
pub mod narrative;
/// Priority ranking strategies.
pub mod ranking;
/// Daily capacity scheduler.
pub mod scheduler;
/// Task model and loaders.
pub mod tasks;
/// Tools exposed to agents.
pub mod tools;
/// Core types and error handling.
pub mod types;
/// Configuration and logging setup.
pub mod utils;
/// Planning workflow.
pub mod workflows;

// Re-export commonly used types
pub use llm::LLMClient;
pub use scheduler::{schedule, ScheduleResult, SchedulerSettings, WorkItem};
pub use tasks::{Priority, Task};
pub use tools::registry::ToolRegistry;
pub use types::{AppError, Result};
pub use utils::toml_config::TaskflowConfig;
pub use workflows::{TaskPlanningWorkflow, WorkflowOutput, WorkflowStep};
