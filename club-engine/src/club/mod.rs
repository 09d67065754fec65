//! Club simulation core
//!
//! - **settings**: tables, business hours, hourly cost
//! - **tables**: per-table occupancy and billing totals
//! - **clients**: who is in the club and where
//! - **queue**: clients waiting for a table
//! - **billing**: seat duration → payment units
//! - **processor**: the state machine that ties them together

pub mod billing;
pub mod clients;
pub mod processor;
pub mod queue;
pub mod tables;

pub use clients::{ClientRegistry, ClientStatus};
pub use processor::ClubSession;
pub use queue::WaitingQueue;
pub use tables::{TableAccount, TableRegistry};

use shared::ClubTime;

/// Fixed parameters of one business day (header of the input file)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubSettings {
    /// Number of tables, numbered `1..=tables`
    pub tables: u32,
    pub opening: ClubTime,
    pub closing: ClubTime,
    pub cost_per_hour: u32,
}

impl ClubSettings {
    /// Arrivals are accepted in `[opening, closing)`
    pub fn is_open_at(&self, time: ClubTime) -> bool {
        self.opening <= time && time < self.closing
    }
}
