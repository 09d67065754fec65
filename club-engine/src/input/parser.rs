//! Input file parser
//!
//! Layout:
//!
//! ```text
//! 3                 <- table count
//! 09:00 19:00       <- opening, closing
//! 10                <- cost per hour
//! 08:48 1 client1   <- events, one per line
//! 09:54 2 client1 1
//! ```
//!
//! Fields are separated by exactly one space. The first malformed line stops
//! parsing.

use super::error::{InputError, InputErrorKind, InputResult};
use crate::club::ClubSettings;
use crate::utils::time::parse_clock;
use crate::utils::validation::{is_valid_client_name, parse_count};
use shared::{ClientAction, ClubEvent, ClubTime, EventCode, TableId};

const HEADER_LINES: usize = 3;

/// Largest accepted table count
pub const MAX_TABLES: u32 = 100_000;

/// Fully validated input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubInput {
    pub settings: ClubSettings,
    pub events: Vec<ClubEvent>,
}

/// Parse and validate a whole input file
///
/// Lines are decoded one by one, so a line that is not UTF-8 is reported
/// like any other malformed line.
pub fn parse(input: impl AsRef<[u8]>) -> InputResult<ClubInput> {
    let mut lines = split_lines(input.as_ref());
    while lines.len() > HEADER_LINES && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let line_at = |index: usize| -> InputResult<&str> {
        let raw = lines
            .get(index)
            .copied()
            .ok_or_else(|| InputError::new(index + 1, "", InputErrorKind::MissingLine))?;
        decode_line(index + 1, raw)
    };
    let settings = parse_header([line_at(0)?, line_at(1)?, line_at(2)?])?;

    let mut validator = EventValidator::new(settings);
    let events = (HEADER_LINES..lines.len())
        .map(|index| validator.validate(index + 1, line_at(index)?))
        .collect::<InputResult<Vec<_>>>()?;

    Ok(ClubInput { settings, events })
}

/// Split on `\n`, dropping a trailing `\r` from each line
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();
    // 末尾换行不产生新行
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

fn decode_line(line_no: usize, raw: &[u8]) -> InputResult<&str> {
    std::str::from_utf8(raw).map_err(|_| {
        InputError::new(
            line_no,
            String::from_utf8_lossy(raw),
            InputErrorKind::InvalidEncoding,
        )
    })
}

/// Parse the three header lines
pub fn parse_header(lines: [&str; HEADER_LINES]) -> InputResult<ClubSettings> {
    let [count_line, hours_line, cost_line] = lines;

    let tables = parse_count(count_line)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n <= MAX_TABLES)
        .ok_or_else(|| InputError::new(1, count_line, InputErrorKind::InvalidTableCount))?;

    let (opening, closing) = parse_business_hours(hours_line)
        .ok_or_else(|| InputError::new(2, hours_line, InputErrorKind::InvalidBusinessHours))?;
    if closing < opening {
        return Err(InputError::new(
            2,
            hours_line,
            InputErrorKind::ClosingBeforeOpening,
        ));
    }

    let cost_per_hour = parse_count(cost_line)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| InputError::new(3, cost_line, InputErrorKind::InvalidCost))?;

    Ok(ClubSettings {
        tables,
        opening,
        closing,
        cost_per_hour,
    })
}

fn parse_business_hours(line: &str) -> Option<(ClubTime, ClubTime)> {
    let (opening, closing) = line.split_once(' ')?;
    Some((parse_clock(opening)?, parse_clock(closing)?))
}

/// Validates event lines one at a time, tracking the previous event time
#[derive(Debug, Clone)]
pub struct EventValidator {
    settings: ClubSettings,
    last_time: Option<ClubTime>,
}

impl EventValidator {
    pub fn new(settings: ClubSettings) -> Self {
        Self {
            settings,
            last_time: None,
        }
    }

    /// Validate one event line (`line_no` is 1-based, used for reporting)
    pub fn validate(&mut self, line_no: usize, line: &str) -> InputResult<ClubEvent> {
        let fail = |kind| InputError::new(line_no, line, kind);

        if line.is_empty() {
            return Err(fail(InputErrorKind::BlankLine));
        }
        let fields: Vec<&str> = line.split(' ').collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(fail(InputErrorKind::FieldCount));
        }

        let time = parse_clock(fields[0]).ok_or_else(|| fail(InputErrorKind::InvalidTime))?;
        let code = parse_count(fields[1])
            .and_then(|n| u8::try_from(n).ok())
            .and_then(|n| EventCode::try_from(n).ok())
            .filter(EventCode::is_incoming)
            .ok_or_else(|| fail(InputErrorKind::UnknownEventKind))?;

        let client = fields[2];
        if !is_valid_client_name(client) {
            return Err(fail(InputErrorKind::InvalidClientName));
        }

        let table_field = fields.get(3).copied();
        let action = match (code, table_field) {
            (EventCode::ClientSeated, Some(raw)) => ClientAction::Sit {
                table: self
                    .parse_table(raw)
                    .ok_or_else(|| fail(InputErrorKind::TableOutOfRange))?,
            },
            (EventCode::ClientSeated, None) => return Err(fail(InputErrorKind::MissingTable)),
            (_, Some(_)) => return Err(fail(InputErrorKind::UnexpectedTable)),
            (EventCode::ClientArrived, None) => ClientAction::Arrive,
            (EventCode::ClientWaiting, None) => ClientAction::Wait,
            (_, None) => ClientAction::Leave,
        };

        if time > self.settings.closing {
            return Err(fail(InputErrorKind::AfterClosing));
        }
        if self.last_time.is_some_and(|last| time < last) {
            return Err(fail(InputErrorKind::OutOfOrder));
        }
        self.last_time = Some(time);

        Ok(ClubEvent::new(time, client, action))
    }

    fn parse_table(&self, raw: &str) -> Option<TableId> {
        let id = parse_count(raw).and_then(|n| u32::try_from(n).ok())?;
        TableId::new(id).filter(|table| table.get() <= self.settings.tables)
    }
}
