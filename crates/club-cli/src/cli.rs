//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Computer club day simulator.
///
/// Replays one working day of a computer club from an event log, printing
/// the annotated event stream followed by per-table revenue statistics.
#[derive(Debug, Parser)]
#[command(name = "club", version, about, long_about = None)]
pub struct Cli {
    /// Path to the day input file.
    pub input: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
