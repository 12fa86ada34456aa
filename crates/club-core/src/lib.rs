//! Core domain logic for the computer club simulator.
//!
//! This crate contains the fundamental types and logic for:
//! - Parsing: reading the day input, a configuration header followed by
//!   the chronological event log
//! - Simulation: replaying the events through the club state machine,
//!   echoing each one and annotating it with synthetic records
//! - Statistics: per-table revenue and occupied time for the day

pub mod config;
pub mod event;
pub mod parse;
pub mod simulate;
pub mod types;

pub use config::ClubConfig;
pub use event::{Event, EventKind, Rejection};
pub use parse::{DayInput, ParseError, parse_day};
pub use simulate::{DayOutcome, Record, TableStat, simulate_day};
pub use types::{ClientName, TableId, ValidationError};
