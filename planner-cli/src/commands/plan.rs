use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use planner_core::catalog::{SearchResults, Section};
use planner_core::palette::Palette;
use planner_core::schedule::WeeklySchedule;
use planner_core::selection::SelectionRegistry;

use crate::render::{Render, pluralize, render_toggle};

/// Apply each toggle in order, then print the selected sections and the
/// week they add up to.
pub fn run(results: &SearchResults, palette: Palette, toggles: &[String]) -> Result<()> {
    let selection = apply_toggles(results, palette, toggles)?;

    println!();
    println!(
        "{}",
        format!(
            "{} {} Selected",
            selection.len(),
            pluralize("Section", selection.len())
        )
        .bold()
    );
    for entry in selection.entries() {
        println!("   {}", entry.render());
    }

    println!();
    println!("{}", "Weekly schedule".bold());
    println!("{}", WeeklySchedule::from_selection(&selection).render());

    Ok(())
}

fn apply_toggles(
    results: &SearchResults,
    palette: Palette,
    toggles: &[String],
) -> Result<SelectionRegistry<Section>> {
    let mut selection = SelectionRegistry::new(palette);

    for crn in toggles {
        let section = results
            .find(crn)
            .with_context(|| format!("Cannot toggle CRN {}", crn))?;
        let toggled = selection.toggle(section.clone());
        println!("{}", render_toggle(&toggled, section));
    }

    Ok(selection)
}
