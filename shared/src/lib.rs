//! Shared types for the club replay workspace
//!
//! Value types, event codes and report models used by both the engine and
//! the output layer.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use error::{ClubErrorKind, EventCode, InvalidEventCode};
pub use models::{ClientAction, ClubEvent, ClubTime, DailyReport, LogLine, TableSummary};
pub use types::TableId;
