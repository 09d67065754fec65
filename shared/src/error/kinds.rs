//! Club rule violations
//!
//! These are not failures of the program. The engine reports them as
//! `HH:MM 13 <name>` lines and keeps going.

use serde::Serialize;
use std::fmt;

/// Rule violation kind (业务规则错误)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClubErrorKind {
    /// Arrival before opening or at/after closing
    NotOpenYet,
    /// Arrival of a client who is already in the club
    YouShallNotPass,
    /// Requested table is occupied
    PlaceIsBusy,
    /// Action by a client who is not in the club
    ClientUnknown,
    /// Wait request while a table is free
    #[serde(rename = "ICanWaitNoLonger!")]
    ICanWaitNoLonger,
}

impl ClubErrorKind {
    /// Name printed after code 13
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClubErrorKind::NotOpenYet => "NotOpenYet",
            ClubErrorKind::YouShallNotPass => "YouShallNotPass",
            ClubErrorKind::PlaceIsBusy => "PlaceIsBusy",
            ClubErrorKind::ClientUnknown => "ClientUnknown",
            ClubErrorKind::ICanWaitNoLonger => "ICanWaitNoLonger!",
        }
    }
}

impl fmt::Display for ClubErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_log_names() {
        assert_eq!(ClubErrorKind::NotOpenYet.to_string(), "NotOpenYet");
        assert_eq!(ClubErrorKind::YouShallNotPass.to_string(), "YouShallNotPass");
        assert_eq!(ClubErrorKind::PlaceIsBusy.to_string(), "PlaceIsBusy");
        assert_eq!(ClubErrorKind::ClientUnknown.to_string(), "ClientUnknown");
        assert_eq!(
            ClubErrorKind::ICanWaitNoLonger.to_string(),
            "ICanWaitNoLonger!"
        );
    }

    #[test]
    fn test_serialize_uses_log_name() {
        let json = serde_json::to_string(&ClubErrorKind::ICanWaitNoLonger).unwrap();
        assert_eq!(json, "\"ICanWaitNoLonger!\"");
        let json = serde_json::to_string(&ClubErrorKind::PlaceIsBusy).unwrap();
        assert_eq!(json, "\"PlaceIsBusy\"");
    }
}
