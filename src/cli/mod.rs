//! CLI module for taskflow
//!
//! Command-line parsing and handlers for the `taskflow` binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod init;
pub mod output;
pub mod plan;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// taskflow - daily capacity task planner
///
/// Ranks a task list by priority and due date, then packs it into
/// working days without exceeding the daily hour budget.
#[derive(Parser, Debug)]
#[command(
    name = "taskflow",
    version,
    about = "Rank tasks and pack them into working days",
    long_about = "Ranks a task list by priority and due date, then greedily packs it into\n\
                  working days that respect a daily capacity in hours.\n\n\
                  Use 'init' to scaffold a config and a sample task file.",
    after_help = "EXAMPLES:\n    \
                  taskflow init                          # Write taskflow.toml and tasks.json\n    \
                  taskflow plan tasks.json               # Plan starting today\n    \
                  taskflow plan tasks.csv --start 2024-01-15 --capacity 6\n    \
                  taskflow plan tasks.json --json        # Machine-readable schedule"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "taskflow.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a day-by-day schedule from a task file
    ///
    /// Accepts a JSON array of tasks or a CSV file with an
    /// id,title,estimated_hours,priority,due_date header.
    Plan {
        /// Task file (.json or .csv)
        tasks_file: PathBuf,

        /// First day to schedule (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        start: Option<NaiveDate>,

        /// Override the configured hours per day
        #[arg(long)]
        capacity: Option<f64>,

        /// Schedule work on Saturdays and Sundays too
        #[arg(long)]
        include_weekends: bool,

        /// Print the workflow output as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Skip the narrative summary
        #[arg(long)]
        no_narrative: bool,
    },

    /// Initialize a taskflow project
    ///
    /// Creates taskflow.toml with the default settings and a sample
    /// tasks.json to plan against.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration information
    Config {
        /// Show the full configuration as TOML
        #[arg(short = 'f', long)]
        full: bool,

        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
