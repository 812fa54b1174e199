use anyhow::Result;
use owo_colors::OwoColorize;
use planner_core::catalog::SearchResults;

use crate::render::{Render, pluralize};

pub fn run(results: &SearchResults) -> Result<()> {
    if results.is_empty() {
        println!("{}", "No sections found".dimmed());
        return Ok(());
    }

    for (i, section) in results.sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", section.render());
    }

    println!();
    println!(
        "{}",
        format!("{} {}", results.len(), pluralize("section", results.len())).dimmed()
    );

    Ok(())
}
