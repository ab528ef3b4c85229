use anyhow::{bail, Context};
use std::path::Path;
use taskflow::cli::init::{self, InitConfig, InitResult};
use taskflow::cli::output::Output;
use taskflow::cli::plan::{self, PlanOptions};
use taskflow::cli::{Cli, Commands};
use taskflow::utils::logging::init_tracing;
use taskflow::utils::toml_config::{LoggingConfig, TaskflowConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let Some(command) = cli.command else {
        output.banner();
        output.info("No command given.");
        output.hint("Scaffold a config and sample tasks, then plan them:");
        output.command("taskflow init");
        output.command("taskflow plan tasks.json");
        return Ok(());
    };

    match command {
        Commands::Init { path, force } => {
            // no config exists yet
            init_tracing(&LoggingConfig::default(), cli.verbose);
            match init::run(InitConfig { path, force }, &output) {
                InitResult::Success => {}
                InitResult::AlreadyExists => bail!("taskflow.toml already exists"),
                InitResult::Error(e) => bail!("init failed: {}", e),
            }
        }
        Commands::Plan {
            tasks_file,
            start,
            capacity,
            include_weekends,
            json,
            no_narrative,
        } => {
            let config = load_config(&cli.config, cli.verbose)?;
            let options = PlanOptions {
                tasks_file,
                start,
                capacity,
                include_weekends,
                json,
                no_narrative,
            };
            if let Err(e) = plan::run(config, options, &output).await {
                output.error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Config { full, validate } => {
            let config = load_config(&cli.config, cli.verbose)?;
            show_config(&cli.config, &config, full, validate, &output)?;
        }
    }

    Ok(())
}

/// Load the config file (defaults when absent) and start logging from it.
fn load_config(path: &Path, verbose: bool) -> anyhow::Result<TaskflowConfig> {
    let config = TaskflowConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    init_tracing(&config.logging, verbose);
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

fn show_config(
    path: &Path,
    config: &TaskflowConfig,
    full: bool,
    validate: bool,
    output: &Output,
) -> anyhow::Result<()> {
    output.header("Configuration");
    if path.exists() {
        output.kv("File", &path.display().to_string());
    } else {
        output.kv("File", &format!("{} (not found, using defaults)", path.display()));
    }

    if validate {
        let warnings = config.validate_with_warnings()?;
        if warnings.is_empty() {
            output.success("Configuration is valid");
        } else {
            for warning in &warnings {
                output.warning(&warning.message);
            }
        }
    }

    if full {
        println!("\n{}", config.to_toml_string()?);
        return Ok(());
    }

    output.kv(
        "Capacity",
        &format!("{}h per day", config.scheduler.capacity_hours_per_day),
    );
    output.kv("Skip weekends", &config.scheduler.skip_weekends.to_string());
    output.kv(
        "Day starts",
        &format!("{:02}:00", config.scheduler.day_start_hour),
    );
    output.kv("Ranking", &format!("{:?}", config.ranking.strategy).to_lowercase());
    output.kv("Narrative", &config.narrative.enabled.to_string());
    output.kv("Log level", &config.logging.level);

    Ok(())
}
