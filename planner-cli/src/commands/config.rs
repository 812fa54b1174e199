use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use planner_core::config::PlannerConfig;

use crate::render::swatch;

pub fn run() -> Result<()> {
    let path = PlannerConfig::config_path()?;
    let config = PlannerConfig::load()?;
    let palette = config
        .palette()
        .with_context(|| format!("Invalid palette in {}", path.display()))?;

    println!("{} {}", "Config:".bold(), path.display());
    println!("{} {}", "Results:".bold(), config.results_path().display());

    println!("{}", "Palette:".bold());
    for color in palette.colors() {
        println!("   {} {}", swatch(color), color);
    }
    println!(
        "   {} {} {}",
        swatch(palette.overflow()),
        palette.overflow(),
        "(default)".dimmed()
    );

    Ok(())
}
