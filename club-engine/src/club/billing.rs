//! Table billing (计费)
//!
//! Every started hour is billed. A seat shorter than a minute is still billed
//! one hour.

use shared::ClubTime;

const MINUTES_PER_UNIT: u32 = 60;

/// Result of closing one seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accrual {
    /// Billed hours
    pub units: u32,
    /// Time the seat was held
    pub elapsed: ClubTime,
}

/// Payment units for a seat of `minutes`
#[inline]
pub const fn payment_units(minutes: u32) -> u32 {
    if minutes == 0 {
        return 1;
    }
    minutes.div_ceil(MINUTES_PER_UNIT)
}

/// Bill a seat held from `seated_at` until `checkout`
pub fn charge(seated_at: ClubTime, checkout: ClubTime) -> Accrual {
    let minutes = seated_at.minutes_until(checkout);
    Accrual {
        units: payment_units(minutes),
        elapsed: ClubTime::from_minutes(minutes),
    }
}
