//! Schedule efficiency metrics.
//!
//! Measures how much idle time and walking a day built from a schedule
//! involves, by folding over chronologically consecutive sections.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Gap | Sum of max(0, next.start - prev.end) in minutes |
//! | Total Distance | Sum of haversine(prev.location, next.location) |
//!
//! Every section is placed on one shared timeline regardless of its meeting
//! days; [`compute_day_metrics`] restricts the fold to a single weekday.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::geodistance::{location_distance, DistanceUnit};
use crate::models::{chronological, CourseSection, Location, LocationRegistry, Weekday};

/// The move from one section to the chronologically next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    /// CRN of the section being left.
    pub from_crn: u32,
    /// CRN of the next section.
    pub to_crn: u32,
    /// Idle minutes between the two (never negative).
    pub gap_minutes: u32,
    /// Great-circle distance between the two locations.
    pub distance: f64,
}

/// Schedule-level totals plus the per-transition breakdown.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScheduleMetrics {
    /// Sum of idle minutes between consecutive sections.
    pub total_gap_minutes: u32,
    /// Sum of walking distance between consecutive sections.
    pub total_distance: f64,
    /// Unit of every distance in this result.
    pub unit: DistanceUnit,
    /// One entry per consecutive pair, in chronological order.
    pub transitions: Vec<Transition>,
}

impl ScheduleMetrics {
    /// Number of building changes (transitions with non-zero distance).
    pub fn building_changes(&self) -> usize {
        self.transitions.iter().filter(|t| t.distance > 0.0).count()
    }

    /// Longest single gap, in minutes.
    pub fn max_gap_minutes(&self) -> u32 {
        self.transitions
            .iter()
            .map(|t| t.gap_minutes)
            .max()
            .unwrap_or(0)
    }
}

fn resolve<'r>(registry: &'r LocationRegistry, section: &CourseSection) -> Result<&'r Location> {
    registry.get(&section.location).ok_or_else(|| {
        warn!(crn = section.crn, location = %section.location, "unresolved location");
        ScheduleError::UnresolvedLocation {
            crn: section.crn,
            location: section.location.clone(),
        }
    })
}

fn fold(
    ordered: &[&CourseSection],
    registry: &LocationRegistry,
    unit: DistanceUnit,
) -> Result<ScheduleMetrics> {
    let mut metrics = ScheduleMetrics {
        unit,
        ..ScheduleMetrics::default()
    };

    // A lone section still has to name a real place.
    if let [only] = ordered {
        resolve(registry, only)?;
    }

    for pair in ordered.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let gap_minutes = prev.end_time.minutes_until(next.start_time);
        let distance = location_distance(resolve(registry, prev)?, resolve(registry, next)?, unit);

        metrics.total_gap_minutes += gap_minutes;
        metrics.total_distance += distance;
        metrics.transitions.push(Transition {
            from_crn: prev.crn,
            to_crn: next.crn,
            gap_minutes,
            distance,
        });
    }

    debug!(
        sections = ordered.len(),
        total_gap_minutes = metrics.total_gap_minutes,
        total_distance = metrics.total_distance,
        unit = unit.symbol(),
        "computed schedule metrics"
    );
    Ok(metrics)
}

/// Computes gap and distance totals for a set of sections.
///
/// Sections are sorted by start time (ties by CRN) before folding, so the
/// result does not depend on input order. Empty and single-section sets
/// yield zero totals.
///
/// # Errors
/// [`ScheduleError::UnresolvedLocation`] if any section's location is not
/// in `registry`. No partial totals are returned.
pub fn compute_metrics(
    sections: &[CourseSection],
    registry: &LocationRegistry,
    unit: DistanceUnit,
) -> Result<ScheduleMetrics> {
    fold(&chronological(sections), registry, unit)
}

/// Like [`compute_metrics`], restricted to the sections meeting on `day`.
pub fn compute_day_metrics(
    sections: &[CourseSection],
    day: Weekday,
    registry: &LocationRegistry,
    unit: DistanceUnit,
) -> Result<ScheduleMetrics> {
    let ordered = chronological(sections.iter().filter(|s| s.meets_on(day)));
    fold(&ordered, registry, unit)
}
