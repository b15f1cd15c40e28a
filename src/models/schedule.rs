//! Validated schedule model.
//!
//! A schedule is a conflict-free set of sections in chronological order.
//! It is only produced by [`validate_schedule`](crate::validation::validate_schedule)
//! and never changes afterwards; a new candidate set means a new schedule.

use serde::Serialize;

use super::{ClockTime, CourseSection, Weekday};

/// Default first free slot of an empty day.
pub const DAY_START: ClockTime = ClockTime::from_hm(8, 0);

/// Orders sections by start time, then CRN.
///
/// Stable, and deterministic for sections that start together.
pub fn chronological<'a, I>(sections: I) -> Vec<&'a CourseSection>
where
    I: IntoIterator<Item = &'a CourseSection>,
{
    let mut ordered: Vec<&CourseSection> = sections.into_iter().collect();
    ordered.sort_by_key(|s| (s.start_time, s.crn));
    ordered
}

/// A conflict-free, chronologically ordered set of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule {
    sections: Vec<CourseSection>,
}

impl Schedule {
    /// Orders already-validated sections.
    pub(crate) fn from_validated(sections: &[CourseSection]) -> Self {
        Self {
            sections: chronological(sections).into_iter().cloned().collect(),
        }
    }

    /// Sections in chronological order.
    pub fn sections(&self) -> &[CourseSection] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseSection> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Finds a section by CRN.
    pub fn section(&self, crn: u32) -> Option<&CourseSection> {
        self.sections.iter().find(|s| s.crn == crn)
    }

    /// Sections meeting on `day`, in chronological order.
    pub fn on_day(&self, day: Weekday) -> Vec<&CourseSection> {
        self.sections.iter().filter(|s| s.meets_on(day)).collect()
    }

    /// Earliest time on `day` after every section meeting that day.
    ///
    /// A free day starts at [`DAY_START`].
    pub fn next_available_time(&self, day: Weekday) -> ClockTime {
        self.sections
            .iter()
            .filter(|s| s.meets_on(day))
            .map(|s| s.end_time)
            .max()
            .unwrap_or(DAY_START)
    }

    /// Total minutes spent in class over a week.
    pub fn weekly_class_minutes(&self) -> u32 {
        self.sections
            .iter()
            .map(|s| s.duration_minutes() * s.days.len() as u32)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a CourseSection;
    type IntoIter = std::slice::Iter<'a, CourseSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
