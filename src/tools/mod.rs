//! Tools for Agent Capabilities
//!
//! Tools let agents act beyond text generation. The planner ships one:
//!
//! - [`schedule`](crate::tools::schedule) - the daily capacity scheduler as a
//!   JSON-in / JSON-out tool (`schedule_tasks`)
//! - [`registry`](crate::tools::registry) - tool registration and discovery
//!
//! # Tool Registry
//!
//! ```ignore
//! let registry = ToolRegistry::planning(SchedulerSettings::default());
//! let definitions = registry.definitions();
//! let result = registry
//!     .execute("schedule_tasks", json!({"items": [], "startDate": "2024-01-15"}))
//!     .await?;
//! ```

/// Tool registry for managing available tools.
pub mod registry;
/// Scheduling tool.
pub mod schedule;
