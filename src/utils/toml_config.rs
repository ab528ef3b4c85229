//! TOML-based configuration for taskflow
//!
//! Scheduler, ranking, narrative and logging settings are read from a TOML
//! file (`taskflow.toml`). Every key has a default, so an empty file (or no
//! file at all, via [`TaskflowConfig::load_or_default`]) is a valid setup.

use crate::ranking::RankingStrategy;
use crate::scheduler::{SchedulerSettings, DEFAULT_CAPACITY_HOURS, DEFAULT_DAY_START_HOUR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Root configuration structure loaded from taskflow.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskflowConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub narrative: NarrativeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// ============= Scheduler Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Hour budget per working day
    #[serde(default = "default_capacity_hours_per_day")]
    pub capacity_hours_per_day: f64,

    /// Leave Saturdays and Sundays empty
    #[serde(default = "default_true")]
    pub skip_weekends: bool,

    /// Wall-clock hour that the first task of a day starts at
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,
}

fn default_capacity_hours_per_day() -> f64 {
    DEFAULT_CAPACITY_HOURS
}

fn default_true() -> bool {
    true
}

fn default_day_start_hour() -> u32 {
    DEFAULT_DAY_START_HOUR
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            capacity_hours_per_day: default_capacity_hours_per_day(),
            skip_weekends: default_true(),
            day_start_hour: default_day_start_hour(),
        }
    }
}

// ============= Ranking Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub strategy: RankingStrategy,

    /// Tasks due within this many days get the "due soon" bonus
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: u32,
}

fn default_due_soon_days() -> u32 {
    3
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            strategy: RankingStrategy::default(),
            due_soon_days: default_due_soon_days(),
        }
    }
}

// ============= Narrative Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

// ============= Logging Configuration =============

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Configuration warnings that don't prevent operation but may indicate issues
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub kind: ConfigWarningKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarningKind {
    CapacityExceedsDay,
    PastMidnight,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl TaskflowConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound(path)) => {
                info!(
                    "No configuration at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TaskflowConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacity = self.scheduler.capacity_hours_per_day;
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "scheduler.capacity_hours_per_day must be positive, got {}",
                capacity
            )));
        }

        if self.scheduler.day_start_hour >= 24 {
            return Err(ConfigError::ValidationError(format!(
                "scheduler.day_start_hour must be between 0 and 23, got {}",
                self.scheduler.day_start_hour
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate configuration with warnings for suspicious values
    ///
    /// Returns Ok with warnings, or Err if validation fails
    pub fn validate_with_warnings(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        self.validate()?;

        let mut warnings = Vec::new();
        let scheduler = &self.scheduler;

        if scheduler.capacity_hours_per_day > 24.0 {
            warnings.push(ConfigWarning {
                kind: ConfigWarningKind::CapacityExceedsDay,
                message: format!(
                    "Daily capacity of {}h is longer than a calendar day",
                    scheduler.capacity_hours_per_day
                ),
            });
        }

        if scheduler.day_start_hour as f64 + scheduler.capacity_hours_per_day > 24.0 {
            warnings.push(ConfigWarning {
                kind: ConfigWarningKind::PastMidnight,
                message: format!(
                    "Starting at {:02}:00 with {}h of capacity runs past midnight",
                    scheduler.day_start_hour, scheduler.capacity_hours_per_day
                ),
            });
        }

        Ok(warnings)
    }

    /// Scheduler settings for a scheduling call
    pub fn scheduler_settings(&self) -> SchedulerSettings {
        SchedulerSettings {
            capacity_hours_per_day: self.scheduler.capacity_hours_per_day,
            skip_weekends: self.scheduler.skip_weekends,
            day_start_hour: self.scheduler.day_start_hour,
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> String {
        r#"
[scheduler]
capacity_hours_per_day = 6.5
skip_weekends = false
day_start_hour = 8

[ranking]
strategy = "agent"
due_soon_days = 5

[narrative]
enabled = false

[logging]
level = "debug"
format = "json"
"#
        .to_string()
    }

    #[test]
    fn test_parse_config() {
        let config = TaskflowConfig::from_toml_str(&create_test_config()).unwrap();

        assert_eq!(config.scheduler.capacity_hours_per_day, 6.5);
        assert!(!config.scheduler.skip_weekends);
        assert_eq!(config.scheduler.day_start_hour, 8);
        assert_eq!(config.ranking.strategy, RankingStrategy::Agent);
        assert_eq!(config.ranking.due_soon_days, 5);
        assert!(!config.narrative.enabled);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_defaults() {
        let config = TaskflowConfig::from_toml_str("").unwrap();

        assert_eq!(config, TaskflowConfig::default());
        assert_eq!(config.scheduler.capacity_hours_per_day, 8.0);
        assert!(config.scheduler.skip_weekends);
        assert_eq!(config.scheduler.day_start_hour, 9);
        assert_eq!(config.ranking.strategy, RankingStrategy::Rules);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config =
            TaskflowConfig::from_toml_str("[scheduler]\nskip_weekends = false\n").unwrap();
        assert!(!config.scheduler.skip_weekends);
        assert_eq!(config.scheduler.capacity_hours_per_day, 8.0);
    }

    #[test]
    fn test_validation_zero_capacity() {
        let result = TaskflowConfig::from_toml_str("[scheduler]\ncapacity_hours_per_day = 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_day_start() {
        let result = TaskflowConfig::from_toml_str("[scheduler]\nday_start_hour = 25\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = TaskflowConfig::from_toml_str("[scheduler\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_warnings() {
        let mut config = TaskflowConfig::default();
        assert!(config.validate_with_warnings().unwrap().is_empty());

        config.scheduler.day_start_hour = 20;
        let warnings = config.validate_with_warnings().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, ConfigWarningKind::PastMidnight);

        config.scheduler.capacity_hours_per_day = 30.0;
        let kinds: Vec<_> = config
            .validate_with_warnings()
            .unwrap()
            .into_iter()
            .map(|w| w.kind)
            .collect();
        assert!(kinds.contains(&ConfigWarningKind::CapacityExceedsDay));
    }

    #[test]
    fn test_load_from_file_and_missing() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(create_test_config().as_bytes()).unwrap();
        let config = TaskflowConfig::load(file.path()).unwrap();
        assert_eq!(config.scheduler.day_start_hour, 8);

        let missing = TaskflowConfig::load("/no/such/taskflow.toml");
        assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

        let fallback = TaskflowConfig::load_or_default("/no/such/taskflow.toml").unwrap();
        assert_eq!(fallback, TaskflowConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = TaskflowConfig::from_toml_str(&create_test_config()).unwrap();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("[scheduler]"));
        assert_eq!(TaskflowConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_scheduler_settings() {
        let config = TaskflowConfig::from_toml_str(&create_test_config()).unwrap();
        let settings = config.scheduler_settings();
        assert_eq!(settings.capacity_hours_per_day, 6.5);
        assert!(!settings.skip_weekends);
    }
}
