//! Wall-clock times within a single day.
//!
//! # Time Model
//! All times are whole minutes since midnight. There is no date and no
//! time zone; every section of a schedule lives on the same timeline.
//!
//! Parsing is strict 24-hour `HH:MM`. Formatting never wraps, so values
//! past the end of the day produce an hour field of 24 or more.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Converts an `HH:MM` string to minutes since midnight.
///
/// The string must have exactly two colon-separated numeric fields with
/// hour < 24 and minute < 60.
pub fn time_to_minutes(time: &str) -> Result<u32> {
    let invalid = || ScheduleError::InvalidTime(time.to_string());

    let (hours, minutes) = time.trim().split_once(':').ok_or_else(invalid)?;
    if minutes.contains(':') {
        return Err(invalid());
    }

    let hours = parse_field(hours).ok_or_else(invalid)?;
    let minutes = parse_field(minutes).ok_or_else(invalid)?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
///
/// No wrapping: `minutes_to_time(1440)` is `"24:00"`.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// A time of day, stored as minutes since midnight.
///
/// Serialized as its `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Creates a time from minutes since midnight.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Creates a time from hour and minute fields.
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 60 + minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Minutes from `self` until `later`, or 0 if `later` is not after `self`.
    #[inline]
    pub fn minutes_until(self, later: ClockTime) -> u32 {
        later.0.saturating_sub(self.0)
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        time_to_minutes(s).map(Self)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&minutes_to_time(self.0))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("09:00").unwrap(), 540);
        assert_eq!(time_to_minutes("10:30").unwrap(), 630);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
        assert_eq!(time_to_minutes("9:05").unwrap(), 545);
    }

    #[test]
    fn test_time_to_minutes_rejects_malformed() {
        for bad in [
            "", "0900", "09:00:00", "ab:cd", "24:00", "12:60", "-1:30", "09:", ":30", "123:00",
        ] {
            let err = time_to_minutes(bad).unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidTime(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_minutes_to_time() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(545), "09:05");
        assert_eq!(minutes_to_time(1439), "23:59");
        // No wrapping past midnight
        assert_eq!(minutes_to_time(MINUTES_PER_DAY), "24:00");
        assert_eq!(minutes_to_time(1500), "25:00");
    }

    #[test]
    fn test_clock_time_parse_and_display() {
        let t: ClockTime = "13:45".parse().unwrap();
        assert_eq!(t, ClockTime::from_hm(13, 45));
        assert_eq!(t.minutes(), 825);
        assert_eq!(t.to_string(), "13:45");
    }

    #[test]
    fn test_minutes_until() {
        let a = ClockTime::from_hm(10, 30);
        let b = ClockTime::from_hm(11, 0);
        assert_eq!(a.minutes_until(b), 30);
        assert_eq!(b.minutes_until(a), 0); // never negative
    }

    #[test]
    fn test_clock_time_serde() {
        let t = ClockTime::from_hm(8, 5);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"08:05\"");

        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<ClockTime>("\"8am\"").is_err());
    }
}
