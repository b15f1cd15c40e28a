//! Course section model.
//!
//! A section is one scheduled meeting pattern of a course: a daily time
//! window, the weekdays it repeats on, and the building it is held in.

use serde::{Deserialize, Serialize};

use super::{ClockTime, DaySet};
use crate::error::{Result, ScheduleError};

/// One meeting pattern of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSection {
    /// Subject code, e.g. "CS".
    pub code: String,
    /// Course number, e.g. 1010.
    pub number: u32,
    /// Section label as requested, e.g. "01".
    pub section: String,
    /// Course reference number. Unique per section.
    pub crn: u32,
    /// Course title.
    pub title: String,
    /// Location name, resolved against a [`LocationRegistry`](super::LocationRegistry).
    pub location: String,
    /// Meeting start (inclusive).
    pub start_time: ClockTime,
    /// Meeting end (exclusive).
    pub end_time: ClockTime,
    /// Meeting days.
    pub days: DaySet,
}

impl CourseSection {
    /// Creates a section with the given identity and meeting pattern.
    ///
    /// Title and section label start empty.
    pub fn new(
        code: impl Into<String>,
        number: u32,
        crn: u32,
        location: impl Into<String>,
        start_time: ClockTime,
        end_time: ClockTime,
        days: DaySet,
    ) -> Self {
        Self {
            code: code.into(),
            number,
            section: String::new(),
            crn,
            title: String::new(),
            location: location.into(),
            start_time,
            end_time,
            days,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Course key as used by the catalog, e.g. "CS 1010".
    pub fn course_key(&self) -> String {
        format!("{} {}", self.code, self.number)
    }

    /// Meeting length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.start_time.minutes_until(self.end_time)
    }

    /// Whether the section meets at all on `day`.
    #[inline]
    pub fn meets_on(&self, day: super::Weekday) -> bool {
        self.days.contains(day)
    }

    /// Checks the section's own invariants: non-empty days and
    /// `start_time < end_time`.
    pub fn check(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(ScheduleError::InvalidSection {
                crn: self.crn,
                reason: "no meeting days".to_string(),
            });
        }
        if self.start_time >= self.end_time {
            return Err(ScheduleError::InvalidSection {
                crn: self.crn,
                reason: format!(
                    "start {} is not before end {}",
                    self.start_time, self.end_time
                ),
            });
        }
        Ok(())
    }
}
