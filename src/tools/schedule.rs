use crate::scheduler::{schedule, SchedulerSettings, TracingObserver, WorkItem};
use crate::tools::registry::Tool;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

/// Exposes the daily capacity scheduler to agents.
///
/// Arguments override the configured settings per call; the result is the
/// serialized schedule.
pub struct ScheduleTool {
    defaults: SchedulerSettings,
}

impl ScheduleTool {
    pub fn new(defaults: SchedulerSettings) -> Self {
        Self { defaults }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleArgs {
    items: Vec<WorkItem>,
    start_date: NaiveDate,
    capacity_hours_per_day: Option<f64>,
    skip_weekends: Option<bool>,
}

#[async_trait]
impl Tool for ScheduleTool {
    fn name(&self) -> &str {
        "schedule_tasks"
    }

    fn description(&self) -> &str {
        "Pack ranked work items into working days without exceeding a daily hour budget"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "description": "Work items, most important first",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "durationHours": { "type": "number", "exclusiveMinimum": 0 },
                            "rank": { "type": "number" },
                            "annotation": { "type": "string" }
                        },
                        "required": ["id", "durationHours", "rank"]
                    }
                },
                "startDate": { "type": "string", "format": "date" },
                "capacityHoursPerDay": { "type": "number", "exclusiveMinimum": 0 },
                "skipWeekends": { "type": "boolean" }
            },
            "required": ["items", "startDate"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: ScheduleArgs = serde_json::from_value(args)
            .map_err(|e| AppError::Parse(format!("Invalid schedule_tasks arguments: {}", e)))?;

        let settings = SchedulerSettings {
            capacity_hours_per_day: args
                .capacity_hours_per_day
                .unwrap_or(self.defaults.capacity_hours_per_day),
            skip_weekends: args.skip_weekends.unwrap_or(self.defaults.skip_weekends),
            day_start_hour: self.defaults.day_start_hour,
        };

        let result = schedule(&args.items, &settings, args.start_date, &TracingObserver)?;
        serde_json::to_value(&result)
            .map_err(|e| AppError::Parse(format!("Failed to serialize schedule: {}", e)))
    }
}
