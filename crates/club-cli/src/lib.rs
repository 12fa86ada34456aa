//! Command-line interface for the computer club simulator.
//!
//! The binary reads a day input file, replays it through `club-core`, and
//! prints the annotated event log plus per-table statistics.

mod cli;
pub mod report;

pub use cli::Cli;
