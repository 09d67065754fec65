//! Event codes for the club log
//!
//! Every line of the annotated log (except the opening/closing markers and the
//! table summaries) starts with a time and one of these codes:
//! - 1..4: incoming events, read from the input
//! - 11..13: outgoing events, generated by the engine

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Event code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventCode {
    // ==================== Incoming ====================
    /// Client arrived at the club
    ClientArrived = 1,
    /// Client sat down at a table
    ClientSeated = 2,
    /// Client is waiting for a table
    ClientWaiting = 3,
    /// Client left
    ClientLeft = 4,

    // ==================== Outgoing ====================
    /// Client was removed by the club (queue full or closing time)
    ClientForcedOut = 11,
    /// Client from the waiting queue was given a freed table
    ClientAutoSeated = 12,
    /// Rule violation, followed by the error name
    Error = 13,
}

impl EventCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Whether the code can appear in the input file
    #[inline]
    pub const fn is_incoming(&self) -> bool {
        matches!(
            self,
            EventCode::ClientArrived
                | EventCode::ClientSeated
                | EventCode::ClientWaiting
                | EventCode::ClientLeft
        )
    }
}

/// Error for unknown event code conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid event code: {0}")]
pub struct InvalidEventCode(pub u8);

impl TryFrom<u8> for EventCode {
    type Error = InvalidEventCode;

    fn try_from(value: u8) -> Result<Self, InvalidEventCode> {
        match value {
            1 => Ok(EventCode::ClientArrived),
            2 => Ok(EventCode::ClientSeated),
            3 => Ok(EventCode::ClientWaiting),
            4 => Ok(EventCode::ClientLeft),
            11 => Ok(EventCode::ClientForcedOut),
            12 => Ok(EventCode::ClientAutoSeated),
            13 => Ok(EventCode::Error),
            _ => Err(InvalidEventCode(value)),
        }
    }
}

impl From<EventCode> for u8 {
    #[inline]
    fn from(code: EventCode) -> Self {
        code.code()
    }
}

impl Serialize for EventCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
