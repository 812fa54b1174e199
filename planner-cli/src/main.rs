mod commands;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planner_core::catalog::SearchResults;
use planner_core::config::PlannerConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PLANNER_LOG=debug`
const LOG_ENV: &str = "PLANNER_LOG";

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Browse course sections and build a weekly class schedule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format raw meeting times (HHMM or HH:MM:SS) as 12-hour clock times
    Time {
        #[arg(required = true)]
        raw: Vec<String>,
    },
    /// List the sections in a search results file
    Results {
        /// Search results JSON (defaults to results_file from the config)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Select sections and show the resulting weekly schedule
    Plan {
        /// Search results JSON (defaults to results_file from the config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// CRN to add, or to remove if already selected. Applied in order.
        #[arg(short, long = "toggle", value_name = "CRN")]
        toggles: Vec<String>,
    },
    /// Show the config file location and the color palette
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Time { raw } => commands::time::run(&raw),
        Commands::Results { file } => {
            let path = results_path(file, || Ok(PlannerConfig::load()?))?;
            let results = load_results(&path)?;
            commands::results::run(&results)
        }
        Commands::Plan { file, toggles } => {
            let config = PlannerConfig::load()?;
            let palette = config.palette().context("Invalid palette in config")?;
            let path = results_path(file, || Ok(config.clone()))?;
            let results = load_results(&path)?;
            commands::plan::run(&results, palette, &toggles)
        }
        Commands::Config => commands::config::run(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// The results file from the command line, or from the config. The config
/// is only loaded when no file was given.
fn results_path(
    file: Option<PathBuf>,
    load_config: impl FnOnce() -> Result<PlannerConfig>,
) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(load_config()?.results_path()),
    }
}

fn load_results(path: &Path) -> Result<SearchResults> {
    let results = SearchResults::load(path)
        .with_context(|| format!("Could not load search results from {}", path.display()))?;
    debug!(path = %path.display(), sections = results.len(), "loaded search results");

    Ok(results)
}
