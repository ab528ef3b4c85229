//! `taskflow plan` - rank a task file and print the schedule

use crate::cli::output::Output;
use crate::scheduler::TracingObserver;
use crate::tasks::load_tasks;
use crate::types::{AppError, Result};
use crate::utils::toml_config::TaskflowConfig;
use crate::workflows::{TaskPlanningWorkflow, WorkflowOutput};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line overrides for a planning run
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub tasks_file: PathBuf,
    pub start: Option<NaiveDate>,
    pub capacity: Option<f64>,
    pub include_weekends: bool,
    pub json: bool,
    pub no_narrative: bool,
}

impl PlanOptions {
    /// Fold the overrides into `config`.
    pub fn apply(&self, config: &mut TaskflowConfig) {
        if let Some(capacity) = self.capacity {
            config.scheduler.capacity_hours_per_day = capacity;
        }
        if self.include_weekends {
            config.scheduler.skip_weekends = false;
        }
        if self.no_narrative {
            config.narrative.enabled = false;
        }
    }
}

/// Run the plan command
pub async fn run(
    mut config: TaskflowConfig,
    options: PlanOptions,
    output: &Output,
) -> Result<WorkflowOutput> {
    options.apply(&mut config);
    config.validate()?;

    let tasks = load_tasks(&options.tasks_file)?;
    let start = options
        .start
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let workflow = TaskPlanningWorkflow::from_config(&config, None, Arc::new(TracingObserver));
    let result = workflow.execute(&tasks, start).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::Parse(e.to_string()))?;
        println!("{}", json);
    } else {
        render(&result, config.scheduler.capacity_hours_per_day, output);
    }

    Ok(result)
}

/// Print a workflow result as per-day tables
pub fn render(result: &WorkflowOutput, capacity: f64, output: &Output) {
    let schedule = &result.schedule;

    if schedule.days.is_empty() {
        output.warning("No tasks to schedule");
        return;
    }

    output.header("Schedule");
    let oversized: Vec<NaiveDate> = schedule
        .oversized_days(capacity)
        .iter()
        .map(|d| d.date)
        .collect();

    for day in &schedule.days {
        let title = format!(
            "{} ({:.1}h)",
            day.date.format("%a %Y-%m-%d"),
            day.total_hours
        );
        output.subheader(&title, oversized.contains(&day.date));
        output.table_header(&["Time", "Task", "Hours", "Note"]);
        for assignment in &day.assignments {
            let time = format!("{}-{}", assignment.start_time, assignment.end_time);
            let hours = format!("{:.1}", assignment.duration_hours());
            output.table_row(&[
                time.as_str(),
                assignment.task_id.as_str(),
                hours.as_str(),
                assignment.annotation.as_str(),
            ]);
        }
    }

    let summary = &schedule.summary;
    output.header("Summary");
    output.kv("Tasks", &summary.total_items.to_string());
    output.kv("Working days", &summary.total_days.to_string());
    output.kv("Total hours", &format!("{:.1}", summary.total_hours));
    output.kv(
        "Average per day",
        &format!("{:.1}h of {:.1}h", summary.average_hours_per_day, capacity),
    );

    if !oversized.is_empty() {
        output.warning(&format!(
            "{} day(s) exceed capacity because a single task is longer than a day",
            oversized.len()
        ));
    }

    if let Some(narrative) = &result.narrative {
        output.header("Notes");
        for line in narrative.lines().filter(|l| !l.trim().is_empty()) {
            output.list_item(line.trim());
        }
    }

    output.newline();
}
