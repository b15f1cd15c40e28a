//! End-to-end checks against the sample Virginia Tech data set.

use campus_schedule::catalog::CourseCatalog;
use campus_schedule::engine::{EngineConfig, ScheduleEngine};
use campus_schedule::geodistance::DistanceUnit;
use campus_schedule::models::{LocationRegistry, Weekday};
use campus_schedule::validation::find_conflicts;
use campus_schedule::{ErrorKind, ScheduleError};

const LOCATIONS: &str = include_str!("../data/locations.json");
const CATALOG: &str = include_str!("../data/catalog.json");

fn fixtures() -> (LocationRegistry, CourseCatalog) {
    (
        LocationRegistry::from_json(LOCATIONS).unwrap(),
        CourseCatalog::from_json(CATALOG).unwrap(),
    )
}

#[test]
fn test_sample_data_loads() {
    let (registry, catalog) = fixtures();
    assert_eq!(registry.len(), 8);
    assert_eq!(catalog.len(), 7);

    // Every offered section is held somewhere the registry knows.
    for (key, course) in catalog.iter() {
        for offering in &course.sections {
            assert!(
                registry.contains(&offering.location),
                "{key} {} at {}",
                offering.crn,
                offering.location
            );
        }
    }
}

#[test]
fn test_default_request_accepted() {
    let (registry, catalog) = fixtures();
    let sections = catalog
        .resolve_lines("CS 1010 section 01\nMATH 1010 section 01\nPHYS 1010 section 02")
        .unwrap();

    let eval = ScheduleEngine::new(&registry).evaluate(&sections).unwrap();
    let crns: Vec<u32> = eval.schedule.iter().map(|s| s.crn).collect();
    assert_eq!(crns, vec![20001, 10001, 30002]);

    // 09:15 -> 09:00 clamps to 0, 10:30 -> 13:00 is 150.
    assert_eq!(eval.metrics.total_gap_minutes, 150);
    // Torgersen -> McBryde -> Blacksburg
    assert!((eval.metrics.total_distance - 0.5402).abs() < 1e-3);
    assert_eq!(eval.metrics.transitions.len(), 2);
}

#[test]
fn test_same_slot_rejected() {
    let (registry, catalog) = fixtures();
    let sections = catalog
        .resolve_lines("CS 1010 section 01\nPHYS 1010 section 01")
        .unwrap();

    let err = ScheduleEngine::new(&registry).evaluate(&sections).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overlap);
    assert_eq!(
        err.to_string(),
        "sections 10001 and 30001 have overlapping times"
    );
}

#[test]
fn test_all_conflicts_listed() {
    let (_, catalog) = fixtures();
    let sections = catalog
        .resolve_lines("CS 1010 section 01\nPHYS 1010 section 01\nENG 1010 section 01\nCS 1110 section 01")
        .unwrap();
    // Three MWF 09:00 sections conflict pairwise; the TTh section conflicts with none.
    assert_eq!(find_conflicts(&sections).len(), 3);
}

#[test]
fn test_catalog_errors_surface() {
    let (_, catalog) = fixtures();
    let err = catalog
        .resolve_lines("CS 1010 section 01\nCS 1010 section 05")
        .unwrap_err();
    assert!(matches!(err, ScheduleError::SectionUnavailable { .. }));
    assert_eq!(err.to_string(), "Section 05 not available for CS 1010");

    let err = catalog.resolve_lines("ART 1010 section 01").unwrap_err();
    assert_eq!(err.to_string(), "Course not found: ART 1010");
}

#[test]
fn test_weekly_views() {
    let (registry, catalog) = fixtures();
    let sections = catalog
        .resolve_lines("MATH 1010 section 02\nCS 1110 section 01\nMATH 2110 section 01\nENG 1010 section 02")
        .unwrap();
    let engine = ScheduleEngine::new(&registry)
        .with_config(EngineConfig::new().with_unit(DistanceUnit::Kilometers));
    let schedule = engine.validate(&sections).unwrap();

    // MWF: 09:30-10:45 Torgersen, 11:00-12:30 Derring, 14:45-16:00 Torgersen
    let wed = engine.day_metrics(&schedule, Weekday::Wed).unwrap();
    assert_eq!(wed.total_gap_minutes, 15 + 135);
    assert_eq!(wed.transitions.len(), 2);
    assert_eq!(wed.unit, DistanceUnit::Kilometers);

    assert_eq!(schedule.next_available_time(Weekday::Mon).to_string(), "16:00");
    assert_eq!(schedule.next_available_time(Weekday::Tue).to_string(), "12:00");
}
