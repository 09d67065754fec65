//! ClubSession - event processing for one business day
//!
//! This module handles:
//! - Admission, seating, waiting and leaving (input codes 1..4)
//! - Auto-seating the head of the waiting queue when a table frees up (code 12)
//! - Forced departures: full queue, closing time (code 11)
//! - Rule violations, reported as code 13 lines and otherwise ignored
//!
//! # Event Flow
//!
//! ```text
//! process(event)
//!     ├─ 1. Echo the incoming line
//!     ├─ 2. Check the client's status against the request
//!     ├─ 3. Vacate / bill the old table if needed
//!     ├─ 4. Auto-seat the queue head into the freed table
//!     └─ 5. Apply the request
//!
//! close()
//!     ├─ 1. Force out remaining clients, sorted by name
//!     ├─ 2. Closing marker
//!     └─ 3. Per-table summaries
//! ```
//!
//! Events must come in non-decreasing time order with table ids in
//! `1..=tables`, as produced by [`crate::input`].

#[cfg(test)]
mod tests;

use super::billing::Accrual;
use super::clients::{ClientRegistry, ClientStatus};
use super::queue::WaitingQueue;
use super::tables::TableRegistry;
use super::ClubSettings;
use shared::{ClientAction, ClubErrorKind, ClubEvent, ClubTime, DailyReport, LogLine, TableId};
use tracing::debug;

/// State of the club during one replayed day
#[derive(Debug)]
pub struct ClubSession {
    settings: ClubSettings,
    tables: TableRegistry,
    clients: ClientRegistry,
    queue: WaitingQueue,
    log: Vec<LogLine>,
}

impl ClubSession {
    /// Open the club. The opening marker is the first log line.
    pub fn open(settings: ClubSettings) -> Self {
        debug!(
            tables = settings.tables,
            opening = %settings.opening,
            closing = %settings.closing,
            cost_per_hour = settings.cost_per_hour,
            "Club opened"
        );
        Self {
            tables: TableRegistry::new(settings.tables),
            clients: ClientRegistry::new(),
            queue: WaitingQueue::new(),
            log: vec![LogLine::Opening {
                time: settings.opening,
            }],
            settings,
        }
    }

    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    pub fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    pub fn queue(&self) -> &WaitingQueue {
        &self.queue
    }

    /// Log lines so far
    pub fn log(&self) -> &[LogLine] {
        &self.log
    }

    /// Apply one incoming event
    pub fn process(&mut self, event: &ClubEvent) {
        self.log.push(LogLine::incoming(event));
        let ClubEvent {
            time,
            client,
            action,
        } = event;
        match *action {
            ClientAction::Arrive => self.arrive(*time, client),
            ClientAction::Sit { table } => self.sit(*time, client, table),
            ClientAction::Wait => self.wait(*time, client),
            ClientAction::Leave => self.leave(*time, client),
        }
    }

    /// Close the day and build the report
    pub fn close(mut self) -> DailyReport {
        let closing = self.settings.closing;
        for name in self.clients.sorted_names() {
            self.force_out(closing, &name);
        }
        self.log.push(LogLine::Closing { time: closing });

        let report = DailyReport {
            opening: self.settings.opening,
            closing,
            cost_per_hour: self.settings.cost_per_hour,
            tables: self.tables.summaries(self.settings.cost_per_hour),
            log: self.log,
        };
        debug!(revenue = report.total_revenue(), "Club closed");
        report
    }

    // ========================================================================
    // Incoming events
    // ========================================================================

    fn arrive(&mut self, time: ClubTime, client: &str) {
        if !self.settings.is_open_at(time) {
            return self.reject(time, ClubErrorKind::NotOpenYet);
        }
        if !self.clients.admit(client) {
            return self.reject(time, ClubErrorKind::YouShallNotPass);
        }
        debug!(client, "Client admitted");
    }

    fn sit(&mut self, time: ClubTime, client: &str, table: TableId) {
        let Some(status) = self.clients.status(client) else {
            return self.reject(time, ClubErrorKind::ClientUnknown);
        };
        if !self.tables.is_free(table) {
            return self.reject(time, ClubErrorKind::PlaceIsBusy);
        }

        match status {
            ClientStatus::Seated(previous) => {
                self.vacate(previous, time);
                self.auto_seat(previous, time);
            }
            ClientStatus::Waiting => {
                self.queue.remove(client);
            }
            ClientStatus::Idle => {}
        }
        self.seat(client, table, time);
    }

    fn wait(&mut self, time: ClubTime, client: &str) {
        let Some(status) = self.clients.status(client) else {
            return self.reject(time, ClubErrorKind::ClientUnknown);
        };

        if let ClientStatus::Seated(table) = status {
            self.vacate(table, time);
            self.auto_seat(table, time);
            self.enqueue(client);
            return;
        }

        if self.tables.any_free() {
            return self.reject(time, ClubErrorKind::ICanWaitNoLonger);
        }
        if self.queue_is_full() {
            debug!(client, queued = self.queue.len(), "Waiting queue full");
            self.queue.remove(client);
            self.clients.remove(client);
            self.log.push(LogLine::ForcedOut {
                time,
                client: client.to_string(),
            });
            return;
        }
        if status == ClientStatus::Idle {
            self.enqueue(client);
        }
    }

    fn leave(&mut self, time: ClubTime, client: &str) {
        let Some(status) = self.clients.remove(client) else {
            return self.reject(time, ClubErrorKind::ClientUnknown);
        };
        match status {
            ClientStatus::Seated(table) => {
                self.vacate(table, time);
                self.auto_seat(table, time);
            }
            ClientStatus::Waiting => {
                self.queue.remove(client);
            }
            ClientStatus::Idle => {}
        }
        debug!(client, "Client left");
    }

    // ========================================================================
    // Internal operations
    // ========================================================================

    /// Give the freed `table` to the head of the queue, if anyone is waiting
    fn auto_seat(&mut self, table: TableId, time: ClubTime) {
        let Some(client) = self.queue.pop_front() else {
            return;
        };
        self.log.push(LogLine::AutoSeated {
            time,
            client: client.clone(),
            table,
        });
        self.seat(&client, table, time);
    }

    /// Remove a client at closing time. Never rejected.
    fn force_out(&mut self, time: ClubTime, client: &str) {
        self.log.push(LogLine::ForcedOut {
            time,
            client: client.to_string(),
        });
        match self.clients.remove(client) {
            Some(ClientStatus::Seated(table)) => {
                self.vacate(table, time);
            }
            Some(ClientStatus::Waiting) => {
                self.queue.remove(client);
            }
            Some(ClientStatus::Idle) | None => {}
        }
    }

    fn seat(&mut self, client: &str, table: TableId, time: ClubTime) {
        self.tables.occupy(table, time);
        self.clients.set_status(client, ClientStatus::Seated(table));
        debug!(client, table = table.get(), "Client seated");
    }

    fn vacate(&mut self, table: TableId, time: ClubTime) {
        if let Some(Accrual { units, elapsed }) = self.tables.vacate(table, time) {
            debug!(table = table.get(), units, elapsed = %elapsed, "Table vacated");
        }
    }

    fn enqueue(&mut self, client: &str) {
        self.queue.push_back(client);
        self.clients.set_status(client, ClientStatus::Waiting);
        debug!(client, queued = self.queue.len(), "Client queued");
    }

    /// The queue accepts at most `tables - 1` clients through a wait request.
    /// With no tables at all it is always full.
    fn queue_is_full(&self) -> bool {
        self.queue.len() as i64 >= i64::from(self.settings.tables) - 1
    }

    fn reject(&mut self, time: ClubTime, error: ClubErrorKind) {
        debug!(error = %error, "Request rejected");
        self.log.push(LogLine::Rejected { time, error });
    }
}
