//! Annotated log line
//!
//! The engine appends one `LogLine` per processed input event and one per
//! consequence it generates. `Display` renders the exact text report line.

use crate::error::{ClubErrorKind, EventCode};
use crate::models::{ClubEvent, ClubTime};
use crate::types::TableId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogLine {
    /// Opening time marker (first line)
    Opening { time: ClubTime },
    /// Input event echoed back (codes 1..4)
    Incoming {
        time: ClubTime,
        code: EventCode,
        client: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        table: Option<TableId>,
    },
    /// Client left the club on the club's initiative (code 11)
    ForcedOut { time: ClubTime, client: String },
    /// Queued client given a freed table (code 12)
    AutoSeated {
        time: ClubTime,
        client: String,
        table: TableId,
    },
    /// Rule violation (code 13)
    Rejected { time: ClubTime, error: ClubErrorKind },
    /// Closing time marker
    Closing { time: ClubTime },
}

impl LogLine {
    pub fn incoming(event: &ClubEvent) -> Self {
        LogLine::Incoming {
            time: event.time,
            code: event.action.code(),
            client: event.client.clone(),
            table: event.action.table(),
        }
    }

    pub const fn time(&self) -> ClubTime {
        match self {
            LogLine::Opening { time }
            | LogLine::Incoming { time, .. }
            | LogLine::ForcedOut { time, .. }
            | LogLine::AutoSeated { time, .. }
            | LogLine::Rejected { time, .. }
            | LogLine::Closing { time } => *time,
        }
    }

    /// Event code, `None` for the opening/closing markers
    pub const fn code(&self) -> Option<EventCode> {
        match self {
            LogLine::Opening { .. } | LogLine::Closing { .. } => None,
            LogLine::Incoming { code, .. } => Some(*code),
            LogLine::ForcedOut { .. } => Some(EventCode::ClientForcedOut),
            LogLine::AutoSeated { .. } => Some(EventCode::ClientAutoSeated),
            LogLine::Rejected { .. } => Some(EventCode::Error),
        }
    }
}

/// `HH:MM [<code> <fields>]`
impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time())?;
        if let Some(code) = self.code() {
            write!(f, " {}", code)?;
        }
        match self {
            LogLine::Opening { .. } | LogLine::Closing { .. } => Ok(()),
            LogLine::Incoming { client, table, .. } => {
                write!(f, " {}", client)?;
                if let Some(table) = table {
                    write!(f, " {}", table)?;
                }
                Ok(())
            }
            LogLine::ForcedOut { client, .. } => write!(f, " {}", client),
            LogLine::AutoSeated { client, table, .. } => write!(f, " {} {}", client, table),
            LogLine::Rejected { error, .. } => write!(f, " {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientAction;

    fn at(hour: u32, minute: u32) -> ClubTime {
        ClubTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_incoming_echoes_event() {
        let event = ClubEvent::new(
            at(10, 25),
            "client2",
            ClientAction::Sit {
                table: TableId::new(2).unwrap(),
            },
        );
        let line = LogLine::incoming(&event);
        assert_eq!(line.to_string(), event.to_string());
        assert_eq!(line.code(), Some(EventCode::ClientSeated));
    }

    #[test]
    fn test_outgoing_lines() {
        let forced = LogLine::ForcedOut {
            time: at(19, 0),
            client: "client4".into(),
        };
        assert_eq!(forced.to_string(), "19:00 11 client4");

        let seated = LogLine::AutoSeated {
            time: at(12, 33),
            client: "client4".into(),
            table: TableId::new(1).unwrap(),
        };
        assert_eq!(seated.to_string(), "12:33 12 client4 1");

        let rejected = LogLine::Rejected {
            time: at(8, 48),
            error: ClubErrorKind::NotOpenYet,
        };
        assert_eq!(rejected.to_string(), "08:48 13 NotOpenYet");
    }

    #[test]
    fn test_markers_have_no_code() {
        let opening = LogLine::Opening { time: at(9, 0) };
        assert_eq!(opening.to_string(), "09:00");
        assert_eq!(opening.code(), None);
        assert_eq!(LogLine::Closing { time: at(19, 0) }.time(), at(19, 0));
    }

    #[test]
    fn test_serialize_tagged() {
        let line = LogLine::Rejected {
            time: at(9, 52),
            error: ClubErrorKind::ICanWaitNoLonger,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["kind"], "rejected");
        assert_eq!(json["time"], "09:52");
        assert_eq!(json["error"], "ICanWaitNoLonger!");

        let line = LogLine::Incoming {
            time: at(9, 52),
            code: EventCode::ClientWaiting,
            client: "client1".into(),
            table: None,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["code"], 3);
        assert!(json.get("table").is_none());
    }
}
