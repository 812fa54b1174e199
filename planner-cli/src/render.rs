//! Terminal rendering for planner types.
//!
//! Extension traits that add colored output to planner-core types using
//! owo_colors.

use owo_colors::OwoColorize;
use planner_core::catalog::{Day, MeetingTime, Section};
use planner_core::palette::hex_rgb;
use planner_core::schedule::{ScheduleBlock, WeeklySchedule};
use planner_core::selection::{SelectionEntry, Toggled};
use planner_core::time_format::format_time;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Paint `text` in a palette color. Tokens that aren't `#rrggbb` are
/// printed next to the text instead.
pub fn paint(color: &str, text: &str) -> String {
    match hex_rgb(color) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => format!("{} ({})", text, color.dimmed()),
    }
}

/// A two-cell color swatch.
pub fn swatch(color: &str) -> String {
    match hex_rgb(color) {
        Some((r, g, b)) => "  ".on_truecolor(r, g, b).to_string(),
        None => format!("[{}]", color),
    }
}

/// `U M T W R F S` with meeting days highlighted.
fn render_days(meeting: &MeetingTime) -> String {
    Day::ALL
        .iter()
        .map(|day| {
            let letter = day.letter().to_string();
            if meeting.meets_on(*day) {
                letter.bold().to_string()
            } else {
                letter.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Render for MeetingTime {
    fn render(&self) -> String {
        let start = format_time(Some(self.start_time.as_str())).unwrap_or_default();
        let end = format_time(Some(self.end_time.as_str())).unwrap_or_default();
        let location = self.location().unwrap_or_else(|| "-".to_string());

        format!(
            "{:<12} {:>8} - {:<8}  {}",
            location,
            start,
            end,
            render_days(self)
        )
    }
}

impl Render for Section {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "{} {} {}",
            self.status.code.dimmed(),
            self.title().bold(),
            format!("[{}]", self.crn).dimmed()
        )];

        let method = self
            .instructional_method
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or("-");
        lines.push(format!(
            "   {}  {}  {} - {} ({})",
            self.campus.code,
            self.enrollment_summary(),
            self.part_of_term.name,
            self.delivery_type.name,
            method
        ));

        for meeting in &self.meeting_times {
            lines.push(format!("   {}", meeting.render()));
        }

        if let Some(instructor) = self.primary_instructor() {
            lines.push(format!("   {}", instructor.to_string().dimmed()));
        }

        lines.join("\n")
    }
}

impl Render for SelectionEntry<Section> {
    fn render(&self) -> String {
        let section = self.payload();
        format!(
            "{} {} {}",
            swatch(self.color()),
            paint(self.color(), &section.title()),
            format!("[{}]", section.crn).dimmed()
        )
    }
}

impl Render for ScheduleBlock {
    fn render(&self) -> String {
        format!(
            "{}-{}  {}",
            self.start,
            self.end,
            paint(&self.color, &self.title)
        )
    }
}

impl Render for WeeklySchedule {
    fn render(&self) -> String {
        if self.is_empty() {
            return "   Nothing scheduled".dimmed().to_string();
        }

        let mut lines = Vec::new();
        for (day, blocks) in self.days() {
            if blocks.is_empty() {
                continue;
            }
            lines.push(day.to_string().bold().to_string());
            lines.extend(blocks.iter().map(|b| format!("   {}", b.render())));
        }
        lines.join("\n")
    }
}

/// `+ title` for an added section, `- title` for a removed one.
pub fn render_toggle(toggled: &Toggled, section: &Section) -> String {
    match toggled {
        Toggled::Added(color) => format!("{} {}", "+".green(), paint(color, &section.title())),
        Toggled::Removed(_) => format!("{} {}", "-".red(), section.title().red()),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
