/// Colors handed out to selected sections, in assignment order.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#f87171", "#fb923c", "#facc15", "#4ade80", "#2dd4bf", "#60a5fa", "#a78bfa", "#f472b6",
];

/// Color shared by every section selected after the palette runs out.
pub const DEFAULT_OVERFLOW_COLOR: &str = "#9ca3af";

/// Results file used when neither the CLI nor the config names one.
pub const DEFAULT_RESULTS_FILE: &str = "~/planner/results.json";
