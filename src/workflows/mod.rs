//! Workflow Engine Module
//!
//! The task planning workflow chains three steps:
//!
//! 1. **rank** - a [`PriorityRanker`](crate::ranking::PriorityRanker) orders the tasks
//! 2. **schedule** - the daily capacity scheduler packs them into days
//! 3. **narrate** - an optional [`NarrativeSummarizer`](crate::narrative::NarrativeSummarizer)
//!    comments on the result
//!
//! # Usage
//!
//! ```ignore
//! let workflow = TaskPlanningWorkflow::new(
//!     Arc::new(RuleBasedRanker::default()),
//!     Arc::new(TracingObserver),
//!     config.scheduler_settings(),
//! )
//! .with_summarizer(Arc::new(TemplateSummarizer::new(8.0)));
//!
//! let output = workflow.execute(&tasks, start_date).await?;
//! println!("{} days", output.schedule.summary.total_days);
//! ```

pub mod engine;

pub use engine::{TaskPlanningWorkflow, WorkflowOutput, WorkflowStep};
