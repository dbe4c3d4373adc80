//! Wall-clock time values stored on attendance records.
//!
//! Times are kept as local wall-clock `HH:mm` values with no timezone. Absence
//! records carry the `-` sentinel instead of a real time.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The `HH:mm` format used for every stored and displayed time.
pub const TIME_FORMAT: &str = "%H:%M";

/// The literal stored in place of checkin/checkout on absence records.
pub const ABSENT_MARKER: &str = "-";

/// Parses a strict `HH:mm` time-of-day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// assert!(parse_clock("9h30").is_err());
/// ```
pub fn parse_clock(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}

/// A checkin or checkout value on an attendance record.
///
/// `Absent` sorts before every real time, matching the lexical order of the
/// `-` sentinel against `HH:mm` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClockTime {
    /// The absence sentinel, serialized as `-`.
    Absent,
    /// A wall-clock time of day.
    At(NaiveTime),
}

impl ClockTime {
    /// Returns the time of day, or `None` for the absence sentinel.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            ClockTime::Absent => None,
            ClockTime::At(time) => Some(*time),
        }
    }

    /// Returns true for the absence sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, ClockTime::Absent)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockTime::Absent => f.write_str(ABSENT_MARKER),
            ClockTime::At(time) => write!(f, "{}", time.format(TIME_FORMAT)),
        }
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ABSENT_MARKER {
            return Ok(ClockTime::Absent);
        }
        parse_clock(s).map(ClockTime::At)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        ClockTime::At(time)
    }
}

/// Serde adapter for `NaiveTime` fields written as `HH:mm`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    /// Serializes a time as `HH:mm`.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    /// Deserializes a time from `HH:mm`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_valid_clock() {
        assert_eq!(parse_clock("17:00").unwrap(), time(17, 0));
        assert_eq!(parse_clock(" 08:45 ").unwrap(), time(8, 45));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            parse_clock("24:10"),
            Err(EngineError::InvalidTime { .. })
        ));
        assert!(parse_clock("").is_err());
        assert!(parse_clock("noon").is_err());
    }

    #[test]
    fn test_absent_marker_parses_to_absent() {
        assert_eq!("-".parse::<ClockTime>().unwrap(), ClockTime::Absent);
        assert!(ClockTime::Absent.is_absent());
        assert_eq!(ClockTime::Absent.time(), None);
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ClockTime::At(time(7, 5)).to_string(), "07:05");
        assert_eq!(ClockTime::Absent.to_string(), "-");
    }

    #[test]
    fn test_absent_sorts_first() {
        let mut values = vec![ClockTime::At(time(9, 0)), ClockTime::Absent, ClockTime::At(time(8, 0))];
        values.sort();
        assert_eq!(
            values,
            vec![ClockTime::Absent, ClockTime::At(time(8, 0)), ClockTime::At(time(9, 0))]
        );
    }

    #[test]
    fn test_serializes_as_string() {
        assert_eq!(serde_json::to_string(&ClockTime::At(time(9, 30))).unwrap(), "\"09:30\"");
        assert_eq!(serde_json::to_string(&ClockTime::Absent).unwrap(), "\"-\"");
        let parsed: ClockTime = serde_json::from_str("\"18:15\"").unwrap();
        assert_eq!(parsed, ClockTime::At(time(18, 15)));
        assert!(serde_json::from_str::<ClockTime>("\"late\"").is_err());
    }
}
