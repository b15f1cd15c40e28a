//! Overlap detection and schedule validation.
//!
//! Two sections overlap iff they share a meeting day AND their half-open
//! time windows `[start, end)` intersect. A section ending exactly when
//! another begins is not a conflict.
//!
//! A candidate set is accepted only when no pair overlaps. The check is a
//! plain pairwise scan: class loads are small (well under 20 sections) and
//! the quadratic cost is negligible.
//!
//! # Reference
//! Allen (1983), "Maintaining Knowledge about Temporal Intervals", CACM 26(11)

use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{CourseSection, DaySet, Schedule};

/// A pair of sections that cannot both be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// CRN of the earlier section in input order.
    pub first: u32,
    /// CRN of the later section in input order.
    pub second: u32,
    /// Days on which both sections meet.
    pub days: DaySet,
}

impl From<Conflict> for ScheduleError {
    fn from(c: Conflict) -> Self {
        ScheduleError::Overlap {
            first: c.first,
            second: c.second,
        }
    }
}

/// Whether two sections share a day and an intersecting time window.
pub fn sections_overlap(a: &CourseSection, b: &CourseSection) -> bool {
    a.days.intersects(b.days) && a.start_time < b.end_time && b.start_time < a.end_time
}

/// The conflict between two sections, if any.
fn conflict(a: &CourseSection, b: &CourseSection) -> Option<Conflict> {
    sections_overlap(a, b).then(|| Conflict {
        first: a.crn,
        second: b.crn,
        days: a.days.intersection(b.days),
    })
}

/// Every conflicting pair in the candidate set.
///
/// Pairs are reported in input-index order (`i < j`).
pub fn find_conflicts(sections: &[CourseSection]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            if let Some(c) = conflict(a, b) {
                conflicts.push(c);
            }
        }
    }
    conflicts
}

/// Validates one fixed candidate set.
///
/// Checks each section's own invariants, then every unordered pair. The
/// first overlapping pair rejects the whole set; nothing is partially
/// accepted. An empty set is a valid, empty schedule.
///
/// # Returns
/// The sections in chronological order, or the reason for rejection.
pub fn validate_schedule(sections: &[CourseSection]) -> Result<Schedule> {
    for s in sections {
        s.check()?;
    }

    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            if let Some(c) = conflict(a, b) {
                warn!(first = c.first, second = c.second, days = %c.days, "schedule rejected: overlap");
                return Err(c.into());
            }
        }
    }

    debug!(sections = sections.len(), "schedule accepted");
    Ok(Schedule::from_validated(sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn section(crn: u32, start: &str, end: &str, days: &str) -> CourseSection {
        CourseSection::new(
            "CS",
            1010,
            crn,
            "McBryde Hall",
            start.parse().unwrap(),
            end.parse().unwrap(),
            days.parse().unwrap(),
        )
    }

    #[test]
    fn test_no_common_day_never_overlaps() {
        let a = section(1, "09:00", "10:30", "MWF");
        let b = section(2, "09:00", "10:30", "TTh");
        assert!(!sections_overlap(&a, &b));

        let t = section(3, "08:00", "12:00", "T");
        let th = section(4, "08:00", "12:00", "Th");
        assert!(!sections_overlap(&t, &th));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = section(1, "09:00", "10:30", "MWF");
        let b = section(2, "10:30", "12:00", "MWF");
        assert!(!sections_overlap(&a, &b));
        assert!(!sections_overlap(&b, &a));
    }

    #[test]
    fn test_intersecting_windows_overlap() {
        let a = section(1, "09:00", "10:30", "MWF");
        let b = section(2, "10:29", "12:00", "M");
        assert!(sections_overlap(&a, &b));
        assert!(sections_overlap(&b, &a));

        // Containment
        let outer = section(3, "08:00", "13:00", "W");
        assert!(sections_overlap(&a, &outer));
    }

    #[test]
    fn test_empty_input_accepted() {
        let schedule = validate_schedule(&[]).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_accepts_and_orders() {
        let sections = vec![
            section(30002, "13:00", "14:30", "TTh"),
            section(10001, "09:00", "10:30", "MWF"),
            section(20001, "08:00", "09:15", "TTh"),
        ];
        let schedule = validate_schedule(&sections).unwrap();
        let crns: Vec<u32> = schedule.iter().map(|s| s.crn).collect();
        assert_eq!(crns, vec![20001, 10001, 30002]);
    }

    #[test]
    fn test_disjoint_days_accepted() {
        let sections = vec![
            section(1, "09:00", "10:30", "MWF"),
            section(2, "09:30", "11:00", "TTh"),
        ];
        assert!(validate_schedule(&sections).is_ok());
    }

    #[test]
    fn test_rejects_overlap() {
        let sections = vec![
            section(10001, "09:00", "10:30", "MWF"),
            section(30001, "09:00", "10:30", "MWF"),
        ];
        let err = validate_schedule(&sections).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overlap);
        assert!(matches!(
            err,
            ScheduleError::Overlap { first: 10001, second: 30001 }
        ));
    }

    #[test]
    fn test_three_way_overlap_rejected_in_any_order() {
        let a = section(1, "09:00", "10:00", "M");
        let b = section(2, "09:30", "10:30", "M");
        let c = section(3, "09:45", "11:00", "M");
        let orders = [
            vec![a.clone(), b.clone(), c.clone()],
            vec![c.clone(), b.clone(), a.clone()],
            vec![b.clone(), c.clone(), a.clone()],
        ];
        for order in &orders {
            let err = validate_schedule(order).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Overlap);
        }
        assert_eq!(find_conflicts(&orders[0]).len(), 3);
    }

    #[test]
    fn test_find_conflicts_reports_shared_days() {
        let sections = vec![
            section(1, "09:00", "10:30", "MWF"),
            section(2, "10:00", "11:00", "WTh"),
            section(3, "12:00", "13:00", "MWF"),
        ];
        let conflicts = find_conflicts(&sections);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].first, 1);
        assert_eq!(conflicts[0].second, 2);
        assert_eq!(conflicts[0].days.to_string(), "W");
    }

    #[test]
    fn test_invalid_section_rejected() {
        let sections = vec![section(7, "11:00", "10:00", "M")];
        let err = validate_schedule(&sections).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidSection { crn: 7, .. }));
    }
}
