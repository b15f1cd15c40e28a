//! Course catalog and request-line resolution.
//!
//! The catalog is the read-only reference table of courses and their
//! offered sections, keyed by `"CODE NUMBER"`. Students ask for sections
//! with one line per course, e.g. `CS 1010 section 01`; each line resolves
//! to a [`CourseSection`] ready for validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::models::{ClockTime, CourseSection, DaySet};

/// One offered section of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOffering {
    pub crn: u32,
    pub location: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub days: DaySet,
}

/// A course and its sections, in section-number order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub sections: Vec<SectionOffering>,
}

/// A parsed `CODE NUMBER section N` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRequest {
    /// Upper-cased subject code.
    pub code: String,
    /// Course number digits as typed; leading zeros are significant.
    pub number: String,
    /// Section label as typed, e.g. "01".
    pub section: String,
}

impl SectionRequest {
    /// Parses one request line.
    ///
    /// Accepts any whitespace between fields and a case-insensitive
    /// `section` keyword.
    pub fn parse(line: &str) -> Result<Self> {
        let invalid = || ScheduleError::InvalidRequest(line.to_string());

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[code, number, keyword, section] = fields.as_slice() else {
            return Err(invalid());
        };

        let is_alpha = code.chars().all(|c| c.is_ascii_alphabetic());
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_alpha || !is_digits(number) || !is_digits(section) {
            return Err(invalid());
        }
        if !keyword.eq_ignore_ascii_case("section") {
            return Err(invalid());
        }

        Ok(Self {
            code: code.to_ascii_uppercase(),
            number: number.to_string(),
            section: section.to_string(),
        })
    }

    /// Catalog key, e.g. "CS 1010".
    pub fn course_key(&self) -> String {
        format!("{} {}", self.code, self.number)
    }
}

/// Read-only course reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCatalog {
    courses: BTreeMap<String, Course>,
}

impl CourseCatalog {
    pub fn new(courses: BTreeMap<String, Course>) -> Self {
        Self { courses }
    }

    /// Loads a catalog from a JSON object keyed by course.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, key: &str) -> Option<&Course> {
        self.courses.get(key)
    }

    /// Courses in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Course)> {
        self.courses.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Resolves a request to a concrete section.
    ///
    /// Section numbers are 1-based.
    pub fn resolve(&self, request: &SectionRequest) -> Result<CourseSection> {
        let key = request.course_key();
        let course = self
            .get(&key)
            .ok_or_else(|| ScheduleError::CourseNotFound(key.clone()))?;

        let unavailable = || ScheduleError::SectionUnavailable {
            section: request.section.clone(),
            course: key.clone(),
        };
        let number = request
            .number
            .parse()
            .map_err(|_| ScheduleError::CourseNotFound(key.clone()))?;
        let index: usize = request.section.parse().map_err(|_| unavailable())?;
        let offering = index
            .checked_sub(1)
            .and_then(|i| course.sections.get(i))
            .ok_or_else(unavailable)?;

        Ok(CourseSection {
            code: request.code.clone(),
            number,
            section: request.section.clone(),
            crn: offering.crn,
            title: course.title.clone(),
            location: offering.location.clone(),
            start_time: offering.start_time,
            end_time: offering.end_time,
            days: offering.days,
        })
    }

    /// Parses and resolves one request per non-blank line.
    ///
    /// Stops at the first line that fails.
    pub fn resolve_lines(&self, text: &str) -> Result<Vec<CourseSection>> {
        let sections = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| SectionRequest::parse(line).and_then(|req| self.resolve(&req)))
            .collect::<Result<Vec<_>>>()?;
        debug!(sections = sections.len(), "resolved section requests");
        Ok(sections)
    }
}
