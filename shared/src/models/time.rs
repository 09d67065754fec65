//! Club Time Model (时刻 / 时长)
//!
//! `ClubTime` is used both for wall-clock labels carried by input records
//! (`09:48`) and for accumulated durations such as table work time, where the
//! hour may go past 23.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

const MINUTES_PER_HOUR: u32 = 60;

/// Hour:minute pair
///
/// Field order matters: the derived ordering compares `hour` first, which is
/// the same as comparing `hour * 60 + minute` while `minute < 60` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ClubTime {
    hour: u32,
    minute: u32,
}

impl ClubTime {
    /// 00:00
    pub const ZERO: ClubTime = ClubTime { hour: 0, minute: 0 };

    /// Returns `None` if `minute` is not in `0..60`
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if minute >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Build a duration from a minute count, carrying into hours
    pub const fn from_minutes(minutes: u32) -> Self {
        Self {
            hour: minutes / MINUTES_PER_HOUR,
            minute: minutes % MINUTES_PER_HOUR,
        }
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn as_minutes(&self) -> u32 {
        self.hour * MINUTES_PER_HOUR + self.minute
    }

    /// Minutes from `self` until `later`
    ///
    /// Callers pass `later >= self`; an earlier `later` yields 0.
    pub const fn minutes_until(&self, later: ClubTime) -> u32 {
        later.as_minutes().saturating_sub(self.as_minutes())
    }
}

impl Add for ClubTime {
    type Output = ClubTime;

    fn add(self, rhs: ClubTime) -> ClubTime {
        let minute = self.minute + rhs.minute;
        ClubTime {
            hour: self.hour + rhs.hour + minute / MINUTES_PER_HOUR,
            minute: minute % MINUTES_PER_HOUR,
        }
    }
}

impl AddAssign for ClubTime {
    fn add_assign(&mut self, rhs: ClubTime) {
        *self = *self + rhs;
    }
}

impl fmt::Display for ClubTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Serialized as the same `HH:MM` string the text report prints
impl Serialize for ClubTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
