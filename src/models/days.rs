//! Meeting days.
//!
//! A section meets on a subset of the five-day teaching week. Days are an
//! enumerated set, never a character string: `"TTh"` is {Tue, Thu}, and a
//! Tuesday-only section does not share a day with a Thursday-only one.
//!
//! # Encoding
//! Registrar shorthand is accepted on input: `M`, `T`, `W`, `Th` (or `R`), `F`.
//! `Th` is matched before `T`. Output always uses `Th`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Registrar abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Weekday::Mon => "M",
            Weekday::Tue => "T",
            Weekday::Wed => "W",
            Weekday::Thu => "Th",
            Weekday::Fri => "F",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from the given days.
    pub fn of(days: &[Weekday]) -> Self {
        days.iter().fold(Self::empty(), |set, &d| set.with(d))
    }

    /// Adds a day.
    pub fn with(mut self, day: Weekday) -> Self {
        self.0 |= day.bit();
        self
    }

    /// Whether `day` is in the set.
    #[inline]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Days present in both sets.
    #[inline]
    pub fn intersection(self, other: DaySet) -> DaySet {
        DaySet(self.0 & other.0)
    }

    /// Whether the two sets share at least one day.
    #[inline]
    pub fn intersects(self, other: DaySet) -> bool {
        !self.intersection(other).is_empty()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in week order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromStr for DaySet {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScheduleError::InvalidDays(s.to_string());

        let mut set = DaySet::empty();
        let mut rest = s.trim();
        while !rest.is_empty() {
            let (day, len) = if rest.starts_with("Th") {
                (Weekday::Thu, 2)
            } else {
                let day = match rest.as_bytes()[0] {
                    b'M' => Weekday::Mon,
                    b'T' => Weekday::Tue,
                    b'W' => Weekday::Wed,
                    b'R' => Weekday::Thu,
                    b'F' => Weekday::Fri,
                    _ => return Err(invalid()),
                };
                (day, 1)
            };
            set = set.with(day);
            rest = &rest[len..];
        }

        if set.is_empty() {
            return Err(invalid());
        }
        Ok(set)
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            f.write_str(day.abbreviation())?;
        }
        Ok(())
    }
}

/// Serialized as the compact string, e.g. `"TTh"`.
///
/// The empty set has no string form that parses back, so serializing it is
/// an error.
impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_empty() {
            return Err(serde::ser::Error::custom("cannot serialize an empty day set"));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
