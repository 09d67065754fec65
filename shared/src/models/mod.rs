//! Data models
//!
//! Shared between the replay engine and the report renderers.

pub mod daily_report;
pub mod event;
pub mod log_line;
pub mod time;

// Re-exports
pub use daily_report::*;
pub use event::*;
pub use log_line::*;
pub use time::*;
