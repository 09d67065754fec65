//! Club Event Model
//!
//! One validated input record: `HH:MM <kind> <client> [<table>]`.

use crate::error::EventCode;
use crate::models::ClubTime;
use crate::types::TableId;
use std::fmt;

/// What the client asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAction {
    /// 1: 客户到达
    Arrive,
    /// 2: 客户入座 (table is always in `1..=N`)
    Sit { table: TableId },
    /// 3: 客户等待
    Wait,
    /// 4: 客户离开
    Leave,
}

impl ClientAction {
    pub const fn code(&self) -> EventCode {
        match self {
            ClientAction::Arrive => EventCode::ClientArrived,
            ClientAction::Sit { .. } => EventCode::ClientSeated,
            ClientAction::Wait => EventCode::ClientWaiting,
            ClientAction::Leave => EventCode::ClientLeft,
        }
    }

    pub const fn table(&self) -> Option<TableId> {
        match self {
            ClientAction::Sit { table } => Some(*table),
            _ => None,
        }
    }
}

/// Incoming club event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubEvent {
    pub time: ClubTime,
    pub client: String,
    pub action: ClientAction,
}

impl ClubEvent {
    pub fn new(time: ClubTime, client: impl Into<String>, action: ClientAction) -> Self {
        Self {
            time,
            client: client.into(),
            action,
        }
    }
}

impl fmt::Display for ClubEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.time, self.action.code(), self.client)?;
        if let Some(table) = self.action.table() {
            write!(f, " {}", table)?;
        }
        Ok(())
    }
}
