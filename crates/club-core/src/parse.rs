//! Reader for the day input format.
//!
//! The input is plain text: three header lines (table count, working
//! hours, hourly rate) followed by the event log, one event per line in
//! chronological order:
//!
//! ```text
//! 3
//! 09:00 19:00
//! 10
//! 08:48 1 client1
//! 09:54 2 client1 1
//! ```
//!
//! Fields are separated by single spaces and times are strictly two-digit
//! `HH:MM`. The reader checks structure only; business rules are judged
//! later by the simulation. Any malformed line fails the whole input with
//! a [`ParseError`] naming the 1-based line.

use chrono::NaiveTime;
use thiserror::Error;

use crate::config::ClubConfig;
use crate::event::{Event, EventKind};
use crate::types::{ClientName, TableId, ValidationError};

/// A structural fault in the day input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended before all three header lines were read.
    #[error("line {line}: missing {what} header")]
    MissingHeader {
        /// Line where the header was expected.
        line: usize,
        /// Which header is missing.
        what: &'static str,
    },

    /// A field that must be an unsigned integer was not.
    #[error("line {line}: invalid {what}: {text:?}")]
    InvalidNumber {
        /// Line holding the field.
        line: usize,
        /// Which field failed.
        what: &'static str,
        /// The offending text.
        text: String,
    },

    /// A time field was not a valid `HH:MM` clock reading.
    #[error("line {line}: invalid time: {text:?}")]
    InvalidTime {
        /// Line holding the field.
        line: usize,
        /// The offending text.
        text: String,
    },

    /// The working-hours line did not hold exactly two times.
    #[error("line {line}: invalid working hours: {text:?}")]
    InvalidHours {
        /// Line holding the header.
        line: usize,
        /// The offending text.
        text: String,
    },

    /// A header value failed domain validation.
    #[error("line {line}: {source}")]
    InvalidValue {
        /// Line holding the value.
        line: usize,
        /// What was wrong with it.
        #[source]
        source: ValidationError,
    },

    /// An event line had the wrong shape for its kind.
    #[error("line {line}: invalid event: {text:?}")]
    InvalidEvent {
        /// Line holding the event.
        line: usize,
        /// The offending text.
        text: String,
    },

    /// A seating event named a table the club does not have.
    #[error("line {line}: table {table} out of range (club has {tables})")]
    TableOutOfRange {
        /// Line holding the event.
        line: usize,
        /// The table named by the event.
        table: usize,
        /// How many tables the club has.
        tables: usize,
    },
}

/// A fully parsed day input.
#[derive(Debug, Clone)]
pub struct DayInput {
    /// The club configuration from the header lines.
    pub config: ClubConfig,
    /// The event log, in file order.
    pub events: Vec<Event>,
}

/// Parses the whole day input.
///
/// Returns the configuration and event log, or the first structural fault
/// found. A day with no events at all is valid.
pub fn parse_day(input: &str) -> Result<DayInput, ParseError> {
    let mut lines = input.lines().enumerate();

    let tables = match lines.next() {
        Some((index, text)) => parse_number(index + 1, "table count", text)?,
        None => {
            return Err(ParseError::MissingHeader {
                line: 1,
                what: "table count",
            });
        }
    };
    let (opens_at, closes_at) = match lines.next() {
        Some((index, text)) => parse_hours(index + 1, text)?,
        None => {
            return Err(ParseError::MissingHeader {
                line: 2,
                what: "working hours",
            });
        }
    };
    let hourly_rate = match lines.next() {
        Some((index, text)) => parse_number(index + 1, "hourly rate", text)?,
        None => {
            return Err(ParseError::MissingHeader {
                line: 3,
                what: "hourly rate",
            });
        }
    };

    let config = ClubConfig::new(tables, opens_at, closes_at, hourly_rate).map_err(|source| {
        // Attribute the fault to the header line carrying the bad value.
        let line = match source {
            ValidationError::NotPositive { .. } => 1,
            _ => 2,
        };
        ParseError::InvalidValue { line, source }
    })?;

    let mut events = Vec::new();
    for (index, text) in lines {
        events.push(parse_event(index + 1, text, tables)?);
    }

    tracing::debug!(tables, events = events.len(), "parsed day input");
    Ok(DayInput { config, events })
}

/// Parses one event line: `HH:MM code client` with a table number
/// appended for seating events (code 2) and nothing else.
fn parse_event(line: usize, text: &str, tables: usize) -> Result<Event, ParseError> {
    let invalid = || ParseError::InvalidEvent {
        line,
        text: text.to_string(),
    };

    let parts: Vec<&str> = text.split(' ').collect();
    if parts.len() < 3 {
        return Err(invalid());
    }

    let at = parse_clock(line, parts[0])?;
    let code: u8 = parse_number(line, "event code", parts[1])?;
    let client: ClientName = parts[2].parse().map_err(|_| invalid())?;

    let kind = match (code, parts.len()) {
        (1, 3) => EventKind::Arrived,
        (2, 4) => EventKind::Sat {
            table: parse_table(line, parts[3], tables)?,
        },
        (3, 3) => EventKind::Waiting,
        (4, 3) => EventKind::Left,
        _ => return Err(invalid()),
    };

    Ok(Event { at, client, kind })
}

/// Parses the working-hours header: exactly two times separated by one
/// space.
fn parse_hours(line: usize, text: &str) -> Result<(NaiveTime, NaiveTime), ParseError> {
    let parts: Vec<&str> = text.split(' ').collect();
    let &[opens_at, closes_at] = parts.as_slice() else {
        return Err(ParseError::InvalidHours {
            line,
            text: text.to_string(),
        });
    };
    Ok((parse_clock(line, opens_at)?, parse_clock(line, closes_at)?))
}

/// Parses a strictly two-digit `HH:MM` clock reading.
fn parse_clock(line: usize, text: &str) -> Result<NaiveTime, ParseError> {
    let invalid = || ParseError::InvalidTime {
        line,
        text: text.to_string(),
    };

    // chrono itself tolerates single-digit hours and leading whitespace,
    // so pin the shape down before handing over.
    match text.as_bytes() {
        [h1, h2, b':', m1, m2]
            if h1.is_ascii_digit()
                && h2.is_ascii_digit()
                && m1.is_ascii_digit()
                && m2.is_ascii_digit() => {}
        _ => return Err(invalid()),
    }
    NaiveTime::parse_from_str(text, "%H:%M").map_err(|_| invalid())
}

/// Parses a table number and checks it against the club's table count.
fn parse_table(line: usize, text: &str, tables: usize) -> Result<TableId, ParseError> {
    let id: usize = parse_number(line, "table number", text)?;
    let out_of_range = || ParseError::TableOutOfRange { line, table: id, tables };
    let table = TableId::new(id).map_err(|_| out_of_range())?;
    if id > tables {
        return Err(out_of_range());
    }
    Ok(table)
}

fn parse_number<T: std::str::FromStr>(
    line: usize,
    what: &'static str,
    text: &str,
) -> Result<T, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        what,
        text: text.to_string(),
    })
}
