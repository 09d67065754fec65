//! 时间工具函数 (`HH:MM` 解析)

use chrono::{NaiveTime, Timelike};
use shared::ClubTime;

/// 解析时刻字符串 (HH:MM)
///
/// Exactly two digits, a colon and two digits. Hour and minute ranges are
/// checked by chrono.
pub fn parse_clock(value: &str) -> Option<ClubTime> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped {
        return None;
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M").ok()?;
    ClubTime::new(time.hour(), time.minute())
}
