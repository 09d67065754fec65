//! Input reading and validation
//!
//! Everything the engine assumes about its events is checked here: field
//! shapes, table ranges, time order and the closing bound. Any violation is an
//! [`InputError`] and the day is not replayed.

pub mod error;
pub mod parser;

pub use error::{InputError, InputErrorKind, InputResult};
pub use parser::{ClubInput, EventValidator, MAX_TABLES, parse, parse_header};
