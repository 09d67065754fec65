//! Error and code definitions shared by the engine and the report layer
//!
//! - [`EventCode`]: numeric codes that prefix every event line
//! - [`ClubErrorKind`]: named rule violations reported under code 13
//!
//! # Example
//!
//! ```
//! use shared::error::{ClubErrorKind, EventCode};
//!
//! let line = format!("09:41 {} {}", EventCode::Error, ClubErrorKind::NotOpenYet);
//! assert_eq!(line, "09:41 13 NotOpenYet");
//! ```

mod codes;
mod kinds;

pub use codes::{EventCode, InvalidEventCode};
pub use kinds::ClubErrorKind;
