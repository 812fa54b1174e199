use anyhow::Result;
use planner_core::time_format::format_time;

/// Print each raw time formatted for display, one per line.
/// Empty input prints an empty line.
pub fn run(raw: &[String]) -> Result<()> {
    for time in raw {
        println!("{}", format_time(Some(time.as_str())).unwrap_or_default());
    }

    Ok(())
}
