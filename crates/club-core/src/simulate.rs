//! The day simulation state machine.
//!
//! Replays the chronological event log against the club configuration and
//! produces the annotated output log plus per-table statistics.
//!
//! # Algorithm Summary
//!
//! 1. Every incoming event is echoed to the output log first.
//! 2. The event is checked against the business rules for its kind. A
//!    violation appends a rejection record (code 13) after the echo and
//!    leaves the club state untouched.
//! 3. An accepted departure frees a table; the longest-waiting client is
//!    seated there immediately (synthetic record 12, stamped with the
//!    departure time).
//! 4. After the last event every client still inside is sent home in
//!    ascending name order (synthetic record 11, stamped with the closing
//!    time), billing any open table time up to the close.
//!
//! Billing is per started hour: each seating period is charged in whole
//! hours rounded up, while the statistics track occupied time to the
//! minute. A period of zero length bills nothing.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;

use chrono::{Duration, NaiveTime};

use crate::config::ClubConfig;
use crate::event::{Event, EventKind, Rejection};
use crate::types::{ClientName, TableId};

/// One entry of the day's output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Echo of an incoming event, accepted or not.
    Incoming(Event),
    /// A waiting client took a freed table (code 12).
    SeatedFromQueue {
        /// When the table was freed.
        at: NaiveTime,
        /// The client seated from the queue.
        client: ClientName,
        /// The table they took.
        table: TableId,
    },
    /// A client still inside at closing time was sent home (code 11).
    SentHome {
        /// The closing time.
        at: NaiveTime,
        /// The client sent home.
        client: ClientName,
    },
    /// The preceding incoming event was refused (code 13).
    Rejected {
        /// The time of the refused event.
        at: NaiveTime,
        /// Why it was refused.
        reason: Rejection,
    },
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incoming(event) => write!(f, "{event}"),
            Self::SeatedFromQueue { at, client, table } => {
                write!(f, "{} 12 {client} {table}", at.format("%H:%M"))
            }
            Self::SentHome { at, client } => {
                write!(f, "{} 11 {client}", at.format("%H:%M"))
            }
            Self::Rejected { at, reason } => {
                write!(f, "{} 13 {reason}", at.format("%H:%M"))
            }
        }
    }
}

/// Revenue and occupied time accumulated by one table over the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStat {
    /// The table.
    pub table: TableId,
    /// Total revenue billed for the day.
    pub revenue: u64,
    /// Total time the table was occupied.
    pub occupied: Duration,
}

/// Everything one simulated day produces.
#[derive(Debug, Clone)]
pub struct DayOutcome {
    /// The output log, in emission order.
    pub log: Vec<Record>,
    /// One entry per table, ascending by table id.
    pub tables: Vec<TableStat>,
}

/// Running totals for one table.
#[derive(Debug, Clone, Copy, Default)]
struct TableUsage {
    revenue: u64,
    occupied_minutes: i64,
}

/// Mutable simulation state for one day.
///
/// `present` maps each client inside the club to the start of their
/// current billing period: their arrival time, or the last time they took
/// a seat. Only seated clients are ever billed, so the value matters only
/// while the client holds a table.
#[derive(Debug)]
struct ClubState<'a> {
    config: &'a ClubConfig,
    present: HashMap<ClientName, NaiveTime>,
    seated: HashMap<TableId, ClientName>,
    waiting: VecDeque<ClientName>,
    usage: BTreeMap<TableId, TableUsage>,
}

impl<'a> ClubState<'a> {
    fn new(config: &'a ClubConfig) -> Self {
        let usage = (1..=config.tables())
            .filter_map(|id| TableId::new(id).ok())
            .map(|table| (table, TableUsage::default()))
            .collect();
        Self {
            config,
            present: HashMap::new(),
            seated: HashMap::new(),
            waiting: VecDeque::new(),
            usage,
        }
    }

    /// Admits an arriving client.
    fn arrive(&mut self, at: NaiveTime, client: &ClientName) -> Result<(), Rejection> {
        if at < self.config.opens_at() {
            return Err(Rejection::NotOpenYet);
        }
        if self.present.contains_key(client) {
            return Err(Rejection::YouShallNotPass);
        }
        self.present.insert(client.clone(), at);
        Ok(())
    }

    /// Seats a present client at a table.
    ///
    /// A client already holding a table is billed for it first, including
    /// the case where they re-take the very table they hold: the elapsed
    /// period is billed and a fresh one starts at `at`.
    fn seat(
        &mut self,
        at: NaiveTime,
        client: &ClientName,
        table: TableId,
    ) -> Result<(), Rejection> {
        if !self.present.contains_key(client) {
            return Err(Rejection::ClientUnknown);
        }
        if self.seated.get(&table).is_some_and(|occupant| occupant != client) {
            return Err(Rejection::PlaceIsBusy);
        }
        if let Some(previous) = self.table_of(client) {
            self.vacate(previous, at);
        }
        self.seated.insert(table, client.clone());
        self.present.insert(client.clone(), at);
        self.unqueue(client);
        Ok(())
    }

    /// Puts a client at the back of the waiting queue.
    fn wait(&mut self, client: &ClientName) -> Result<(), Rejection> {
        if self.seated.len() < self.config.tables() {
            return Err(Rejection::ICanWaitNoLonger);
        }
        self.waiting.push_back(client.clone());
        Ok(())
    }

    /// Sends a client out, billing and freeing their table if they hold
    /// one. Returns the freed table so the caller can seat the next
    /// waiter.
    fn leave(&mut self, at: NaiveTime, client: &ClientName) -> Result<Option<TableId>, Rejection> {
        if !self.present.contains_key(client) {
            return Err(Rejection::ClientUnknown);
        }
        let freed = self.table_of(client);
        if let Some(table) = freed {
            self.vacate(table, at);
        }
        self.present.remove(client);
        self.unqueue(client);
        Ok(freed)
    }

    /// Seats the longest-waiting client at a freed table. Their billing
    /// period starts at `at` whether or not they were inside before. A
    /// waiter who queued while holding a table is moved off it: the old
    /// table is billed and freed first, as on a voluntary re-seat, and
    /// any duplicate queue entries are dropped.
    fn seat_from_queue(&mut self, at: NaiveTime, table: TableId) -> Option<ClientName> {
        let next = self.waiting.pop_front()?;
        if let Some(previous) = self.table_of(&next) {
            self.vacate(previous, at);
        }
        self.seated.insert(table, next.clone());
        self.present.insert(next.clone(), at);
        self.unqueue(&next);
        Some(next)
    }

    /// Sends everyone still inside home at closing time, in ascending
    /// name order, billing open tables up to the close.
    fn close_day(&mut self, log: &mut Vec<Record>) {
        let closes_at = self.config.closes_at();
        let mut remaining: Vec<ClientName> = self.present.keys().cloned().collect();
        remaining.sort_unstable();
        tracing::debug!(remaining = remaining.len(), "closing day");

        for client in remaining {
            if let Some(table) = self.table_of(&client) {
                self.vacate(table, closes_at);
            }
            self.present.remove(&client);
            log.push(Record::SentHome {
                at: closes_at,
                client,
            });
        }
        self.waiting.clear();
    }

    /// The table the client currently occupies, if any.
    fn table_of(&self, client: &ClientName) -> Option<TableId> {
        self.seated
            .iter()
            .find_map(|(table, occupant)| (occupant == client).then_some(*table))
    }

    /// Bills the current occupancy of `table` up to `until` and frees the
    /// table.
    fn vacate(&mut self, table: TableId, until: NaiveTime) {
        if let Some(occupant) = self.seated.remove(&table) {
            if let Some(since) = self.present.get(&occupant).copied() {
                self.charge(table, since, until);
            }
        }
    }

    /// Adds one seating period to a table's totals. A started hour bills
    /// in full; an empty period bills nothing.
    fn charge(&mut self, table: TableId, since: NaiveTime, until: NaiveTime) {
        let minutes = (until - since).num_minutes();
        if minutes <= 0 {
            return;
        }
        let hours = u64::try_from(minutes).unwrap_or(0).div_ceil(60);
        let usage = self.usage.entry(table).or_default();
        usage.revenue = usage
            .revenue
            .saturating_add(hours.saturating_mul(self.config.hourly_rate()));
        usage.occupied_minutes += minutes;
        tracing::trace!(table = table.get(), minutes, hours, "billed table time");
    }

    /// Drops any queue entries naming the client. Entries go stale when a
    /// waiting client takes a seat or leaves before being seated.
    fn unqueue(&mut self, client: &ClientName) {
        self.waiting.retain(|queued| queued != client);
    }

    /// Materializes the per-table totals, ascending by table id.
    fn into_stats(self) -> Vec<TableStat> {
        self.usage
            .into_iter()
            .map(|(table, usage)| TableStat {
                table,
                revenue: usage.revenue,
                occupied: Duration::minutes(usage.occupied_minutes),
            })
            .collect()
    }
}

/// Runs one day of club operation.
///
/// Events are consumed strictly in the supplied order; the caller is
/// responsible for feeding them chronologically. Rejected events appear
/// in the log but never change the state, so a day full of violations
/// still produces well-formed statistics.
pub fn simulate_day(config: &ClubConfig, events: &[Event]) -> DayOutcome {
    tracing::debug!(
        tables = config.tables(),
        events = events.len(),
        "replaying day"
    );
    let mut state = ClubState::new(config);
    let mut log = Vec::new();

    for event in events {
        log.push(Record::Incoming(event.clone()));
        let decision = match event.kind {
            EventKind::Arrived => state.arrive(event.at, &event.client),
            EventKind::Sat { table } => state.seat(event.at, &event.client, table),
            EventKind::Waiting => state.wait(&event.client),
            EventKind::Left => match state.leave(event.at, &event.client) {
                Ok(freed) => {
                    if let Some(table) = freed {
                        if let Some(next) = state.seat_from_queue(event.at, table) {
                            log.push(Record::SeatedFromQueue {
                                at: event.at,
                                client: next,
                                table,
                            });
                        }
                    }
                    Ok(())
                }
                Err(reason) => Err(reason),
            },
        };
        if let Err(reason) = decision {
            tracing::debug!(%event, %reason, "event rejected");
            log.push(Record::Rejected {
                at: event.at,
                reason,
            });
        }
    }

    state.close_day(&mut log);
    DayOutcome {
        log,
        tables: state.into_stats(),
    }
}
