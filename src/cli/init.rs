//! `taskflow init` - scaffold a planning directory
//!
//! Writes `taskflow.toml` with every setting at its default and a small
//! `tasks.json` to run `taskflow plan` against.

use crate::cli::output::Output;
use crate::utils::toml_config::TaskflowConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init command
#[derive(Debug, PartialEq)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Project already exists (taskflow.toml found)
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
}

const CONFIG_HEADER: &str = r#"# taskflow configuration
#
# scheduler.capacity_hours_per_day  hours of work packed into one day
# scheduler.skip_weekends           never place work on Saturday or Sunday
# scheduler.day_start_hour          clock hour the first task of a day starts at
# ranking.strategy                  "rules" or "agent"
# logging.level                     overridden by RUST_LOG when set

"#;

const SAMPLE_TASKS: &str = r#"[
  {
    "id": "fix-login",
    "title": "Fix login redirect bug",
    "estimated_hours": 2.5,
    "priority": "critical"
  },
  {
    "id": "review-prs",
    "title": "Review open pull requests",
    "estimated_hours": 3,
    "priority": "high"
  },
  {
    "id": "quarterly-report",
    "title": "Draft quarterly report",
    "estimated_hours": 6,
    "priority": "medium",
    "notes": "Needs numbers from finance"
  },
  {
    "id": "cleanup-ci",
    "title": "Clean up CI cache settings",
    "estimated_hours": 1.5,
    "priority": "low"
  }
]
"#;

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing taskflow");

    let base_path = &config.path;

    let config_path = base_path.join("taskflow.toml");
    if config_path.exists() && !config.force {
        output.warning("taskflow.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.error(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
    }

    let toml_content = match generate_config_toml() {
        Ok(content) => content,
        Err(e) => {
            output.error(&format!("Failed to render default configuration: {}", e));
            return InitResult::Error(e);
        }
    };
    if let Err(e) = write_file(&config_path, &toml_content, config.force) {
        output.error(&format!("Failed to create taskflow.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", "taskflow.toml");

    let tasks_path = base_path.join("tasks.json");
    match write_file(&tasks_path, SAMPLE_TASKS, config.force) {
        Ok(true) => output.created("tasks", "tasks.json"),
        Ok(false) => output.skipped("tasks.json", "already exists"),
        Err(e) => {
            output.error(&format!("Failed to create tasks.json: {}", e));
            return InitResult::Error(e.to_string());
        }
    }

    output.complete("taskflow initialized");

    output.header("Next Steps");
    output.newline();
    output.info("Plan the sample tasks:");
    output.command("taskflow plan tasks.json");
    output.newline();
    output.hint("Edit taskflow.toml to change the daily capacity or ranking strategy");

    InitResult::Success
}

/// Write `content` unless the file exists and `force` is off.
///
/// Returns whether the file was written.
fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write(path, content)?;
    Ok(true)
}

fn generate_config_toml() -> Result<String, String> {
    let body = TaskflowConfig::default()
        .to_toml_string()
        .map_err(|e| e.to_string())?;
    Ok(format!("{}{}", CONFIG_HEADER, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::parse_tasks_json;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_back_to_defaults() {
        let content = generate_config_toml().unwrap();
        assert!(content.starts_with("# taskflow configuration"));

        let parsed = TaskflowConfig::from_toml_str(&content).unwrap();
        assert_eq!(parsed, TaskflowConfig::default());
    }

    #[test]
    fn test_sample_tasks_are_valid() {
        let tasks = parse_tasks_json(SAMPLE_TASKS).unwrap();
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[2].notes.as_deref(), Some("Needs numbers from finance"));
    }

    #[test]
    fn test_init_writes_files() {
        let dir = TempDir::new().unwrap();
        let result = run(
            InitConfig {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &Output::no_color(),
        );

        assert_eq!(result, InitResult::Success);
        assert!(dir.path().join("taskflow.toml").exists());
        assert!(dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("taskflow.toml"), "# mine").unwrap();

        let result = run(
            InitConfig {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &Output::no_color(),
        );
        assert_eq!(result, InitResult::AlreadyExists);
        assert_eq!(
            fs::read_to_string(dir.path().join("taskflow.toml")).unwrap(),
            "# mine"
        );

        let result = run(
            InitConfig {
                path: dir.path().to_path_buf(),
                force: true,
            },
            &Output::no_color(),
        );
        assert_eq!(result, InitResult::Success);
        assert!(fs::read_to_string(dir.path().join("taskflow.toml"))
            .unwrap()
            .contains("[scheduler]"));
    }

    #[test]
    fn test_write_file_respects_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("f.txt");

        assert!(write_file(&path, "one", false).unwrap());
        assert!(!write_file(&path, "two", false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");
        assert!(write_file(&path, "three", true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "three");
    }
}
