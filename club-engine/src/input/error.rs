use thiserror::Error;

/// Why an input line was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputErrorKind {
    #[error("line is missing")]
    MissingLine,

    #[error("blank line")]
    BlankLine,

    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    #[error("table count must be an integer in 0..=100000")]
    InvalidTableCount,

    #[error("business hours must be two HH:MM times")]
    InvalidBusinessHours,

    #[error("closing time is before opening time")]
    ClosingBeforeOpening,

    #[error("hourly cost must be an integer in 0..=4294967295")]
    InvalidCost,

    #[error("event must have 3 or 4 fields")]
    FieldCount,

    #[error("invalid time")]
    InvalidTime,

    #[error("unknown event kind")]
    UnknownEventKind,

    #[error("client name may only contain a-z, 0-9, '_' and '-'")]
    InvalidClientName,

    #[error("only a seat request names a table")]
    UnexpectedTable,

    #[error("seat request without a table")]
    MissingTable,

    #[error("table does not exist")]
    TableOutOfRange,

    #[error("event is earlier than the previous one")]
    OutOfOrder,

    #[error("event is after closing time")]
    AfterClosing,
}

/// Malformed input line. Fatal for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_no}: {kind}: {line:?}")]
pub struct InputError {
    /// 1-based
    pub line_no: usize,
    /// Offending line as read (without the line terminator)
    pub line: String,
    pub kind: InputErrorKind,
}

impl InputError {
    pub fn new(line_no: usize, line: impl Into<String>, kind: InputErrorKind) -> Self {
        Self {
            line_no,
            line: line.into(),
            kind,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;
