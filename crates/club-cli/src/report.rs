//! Rendering of a simulated day to the output text format.
//!
//! The frame is fixed: the opening time on its own line, the output log
//! in emission order, the closing time, then one statistics line per
//! table ascending by table number.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use club_core::{ClubConfig, DayOutcome, TableStat, parse_day, simulate_day};

// ========== Formatting ==========

/// Formats one statistics line: table number, revenue, occupied `HH:MM`.
fn format_table_line(stat: &TableStat) -> String {
    let minutes = stat.occupied.num_minutes();
    format!(
        "{} {} {:02}:{:02}",
        stat.table,
        stat.revenue,
        minutes / 60,
        minutes % 60
    )
}

/// Formats the full day report.
pub fn format_report(config: &ClubConfig, outcome: &DayOutcome) -> String {
    let mut output = String::new();

    writeln!(output, "{}", config.opens_at().format("%H:%M")).unwrap();
    for record in &outcome.log {
        writeln!(output, "{record}").unwrap();
    }
    writeln!(output, "{}", config.closes_at().format("%H:%M")).unwrap();
    for stat in &outcome.tables {
        writeln!(output, "{}", format_table_line(stat)).unwrap();
    }

    output
}

// ========== Public Interface ==========

/// Runs the simulator on the given input file and prints the report.
///
/// A malformed input fails the whole run; nothing is printed in that
/// case, not even partial statistics.
pub fn run(input: &Path) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    tracing::debug!(input = %input.display(), bytes = text.len(), "read day input");
    let day = parse_day(&text).context("invalid day input")?;
    let outcome = simulate_day(&day.config, &day.events);

    print!("{}", format_report(&day.config, &outcome));
    Ok(())
}
