//! Input events and the business-rule rejection codes.

use std::fmt;

use chrono::NaiveTime;

use crate::types::{ClientName, TableId};

/// One entry of the day's incoming event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// When the event happened.
    pub at: NaiveTime,
    /// The client the event is about.
    pub client: ClientName,
    /// What happened.
    pub kind: EventKind,
}

/// The kind of an incoming event.
///
/// The text format identifies kinds by number: 1 arrived, 2 sat down,
/// 3 waiting, 4 left. Only seating carries a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The client entered the club.
    Arrived,
    /// The client took a table.
    Sat {
        /// The table the client sat down at.
        table: TableId,
    },
    /// The client queued for a table.
    Waiting,
    /// The client left the club.
    Left,
}

impl EventKind {
    /// The numeric code used in the text format.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Arrived => 1,
            Self::Sat { .. } => 2,
            Self::Waiting => 3,
            Self::Left => 4,
        }
    }
}

impl fmt::Display for Event {
    /// Formats the event exactly as it appears in the log:
    /// `HH:MM code client` with the table appended for seating events.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.at.format("%H:%M"),
            self.kind.code(),
            self.client
        )?;
        if let EventKind::Sat { table } = self.kind {
            write!(f, " {table}")?;
        }
        Ok(())
    }
}

/// Why the club refused an event.
///
/// Rejections are part of the normal output stream (code 13), not
/// failures: the run continues with the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The client showed up before opening time.
    NotOpenYet,
    /// The client is already inside.
    YouShallNotPass,
    /// The event names a client who is not inside.
    ClientUnknown,
    /// The requested table is held by someone else.
    PlaceIsBusy,
    /// The client asked to wait while a table was free.
    ICanWaitNoLonger,
}

impl Rejection {
    /// The message printed after code 13 in the output stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotOpenYet => "NotOpenYet",
            Self::YouShallNotPass => "YouShallNotPass",
            Self::ClientUnknown => "ClientUnknown",
            Self::PlaceIsBusy => "PlaceIsBusy",
            Self::ICanWaitNoLonger => "ICanWaitNoLonger!",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn plain_event_formats_without_table() {
        let event = Event {
            at: t(8, 48),
            client: ClientName::new("client1").unwrap(),
            kind: EventKind::Arrived,
        };
        assert_eq!(event.to_string(), "08:48 1 client1");
    }

    #[test]
    fn seating_event_formats_with_table() {
        let event = Event {
            at: t(9, 54),
            client: ClientName::new("client3").unwrap(),
            kind: EventKind::Sat {
                table: TableId::new(1).unwrap(),
            },
        };
        assert_eq!(event.to_string(), "09:54 2 client3 1");
    }

    #[test]
    fn kind_codes_match_the_text_format() {
        assert_eq!(EventKind::Arrived.code(), 1);
        assert_eq!(
            EventKind::Sat {
                table: TableId::new(1).unwrap()
            }
            .code(),
            2
        );
        assert_eq!(EventKind::Waiting.code(), 3);
        assert_eq!(EventKind::Left.code(), 4);
    }

    #[test]
    fn rejection_messages_match_the_output_stream() {
        assert_eq!(Rejection::NotOpenYet.to_string(), "NotOpenYet");
        assert_eq!(Rejection::YouShallNotPass.to_string(), "YouShallNotPass");
        assert_eq!(Rejection::ClientUnknown.to_string(), "ClientUnknown");
        assert_eq!(Rejection::PlaceIsBusy.to_string(), "PlaceIsBusy");
        assert_eq!(
            Rejection::ICanWaitNoLonger.to_string(),
            "ICanWaitNoLonger!"
        );
    }
}
