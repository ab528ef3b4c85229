//! Task file loading (JSON and CSV)
//!
//! Every failure names the offending task id so that the user can find the
//! bad row. Values are never coerced: a missing or non-numeric estimate is an
//! error, not a zero.

use super::{Priority, Task};
use crate::types::{AppError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load tasks from a `.json` or `.csv` file, chosen by extension
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let tasks = match extension.as_deref() {
        Some("json") => parse_tasks_json(&content)?,
        Some("csv") => parse_tasks_csv(&content)?,
        _ => {
            return Err(AppError::Parse(format!(
                "Unsupported task file '{}': expected a .json or .csv extension",
                path.display()
            )))
        }
    };

    tracing::debug!(path = %path.display(), count = tasks.len(), "Loaded tasks");
    Ok(tasks)
}

/// Parse a JSON array of task objects
pub fn parse_tasks_json(content: &str) -> Result<Vec<Task>> {
    let values: Vec<Value> = serde_json::from_str(content)
        .map_err(|e| AppError::Parse(format!("Task file is not a JSON array: {}", e)))?;

    let mut tasks = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index + 1));

        let task: Task =
            serde_json::from_value(value).map_err(|e| AppError::malformed(&id, e.to_string()))?;
        tasks.push(task);
    }

    validate_tasks(&tasks)?;
    Ok(tasks)
}

/// Raw CSV row; every column is read as text and converted explicitly
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    title: String,
    estimated_hours: String,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

/// Parse CSV with header `id,title,estimated_hours,priority,due_date,notes`
///
/// `priority`, `due_date` and `notes` may be left empty.
pub fn parse_tasks_csv(content: &str) -> Result<Vec<Task>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut tasks = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|e| {
            AppError::Parse(format!("Invalid CSV record {}: {}", index + 1, e))
        })?;
        tasks.push(row_to_task(row)?);
    }

    validate_tasks(&tasks)?;
    Ok(tasks)
}

fn row_to_task(row: CsvRow) -> Result<Task> {
    let estimated_hours: f64 = row.estimated_hours.parse().map_err(|_| {
        AppError::malformed(
            &row.id,
            format!("estimated_hours '{}' is not a number", row.estimated_hours),
        )
    })?;

    let priority = match non_empty(row.priority) {
        Some(raw) => raw
            .parse::<Priority>()
            .map_err(|e| AppError::malformed(&row.id, e))?,
        None => Priority::default(),
    };

    let due_date = match non_empty(row.due_date) {
        Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            AppError::malformed(&row.id, format!("due_date '{}' is not YYYY-MM-DD", raw))
        })?),
        None => None,
    };

    Ok(Task {
        id: row.id,
        title: row.title,
        estimated_hours,
        priority,
        due_date,
        notes: non_empty(row.notes),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject a batch with an empty id, a non-positive estimate or a repeated id.
pub fn validate_tasks(tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::new();

    for task in tasks {
        if task.id.trim().is_empty() {
            return Err(AppError::malformed(&task.title, "task id must not be empty"));
        }
        if !task.estimated_hours.is_finite() || task.estimated_hours <= 0.0 {
            return Err(AppError::malformed(
                &task.id,
                format!(
                    "estimated_hours must be positive, got {}",
                    task.estimated_hours
                ),
            ));
        }
        if !seen.insert(task.id.as_str()) {
            return Err(AppError::malformed(&task.id, "duplicate task id"));
        }
    }

    Ok(())
}
