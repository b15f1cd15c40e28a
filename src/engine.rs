//! Schedule engine: validation followed by metrics.
//!
//! Holds the injected configuration (location registry, distance unit) so
//! callers do not thread it through every call. Metrics are never produced
//! for a rejected candidate set.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::Result;
use crate::geodistance::DistanceUnit;
use crate::metrics::{compute_day_metrics, compute_metrics, ScheduleMetrics};
use crate::models::{CourseSection, LocationRegistry, Schedule, Weekday};
use crate::validation::validate_schedule;

/// Engine settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Unit of every reported distance.
    pub unit: DistanceUnit,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance unit.
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }
}

/// An accepted schedule and its metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub schedule: Schedule,
    pub metrics: ScheduleMetrics,
}

/// Validates candidate section sets and measures the accepted ones.
///
/// # Example
///
/// ```
/// use campus_schedule::engine::ScheduleEngine;
/// use campus_schedule::models::{CourseSection, Location, LocationRegistry};
///
/// let registry = LocationRegistry::new(vec![
///     Location::new("Torgersen Hall", 37.2289, -80.4232),
///     Location::new("Blacksburg Building", 37.2295, -80.4190),
/// ])
/// .unwrap();
/// let sections = vec![
///     CourseSection::new("MATH", 1010, 20002, "Torgersen Hall",
///         "09:00".parse().unwrap(), "10:30".parse().unwrap(), "MWF".parse().unwrap()),
///     CourseSection::new("PHYS", 1010, 30001, "Blacksburg Building",
///         "11:00".parse().unwrap(), "12:30".parse().unwrap(), "MWF".parse().unwrap()),
/// ];
///
/// let engine = ScheduleEngine::new(&registry);
/// let eval = engine.evaluate(&sections).unwrap();
/// assert_eq!(eval.metrics.total_gap_minutes, 30);
/// assert_eq!(eval.schedule.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleEngine<'a> {
    registry: &'a LocationRegistry,
    config: EngineConfig,
}

impl<'a> ScheduleEngine<'a> {
    /// Creates an engine with the default configuration (miles).
    pub fn new(registry: &'a LocationRegistry) -> Self {
        Self {
            registry,
            config: EngineConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &'a LocationRegistry {
        self.registry
    }

    /// Accepts or rejects one candidate set.
    pub fn validate(&self, sections: &[CourseSection]) -> Result<Schedule> {
        validate_schedule(sections)
    }

    /// Metrics of an accepted schedule.
    pub fn metrics(&self, schedule: &Schedule) -> Result<ScheduleMetrics> {
        compute_metrics(schedule.sections(), self.registry, self.config.unit)
    }

    /// Metrics of an accepted schedule restricted to one weekday.
    pub fn day_metrics(&self, schedule: &Schedule, day: Weekday) -> Result<ScheduleMetrics> {
        compute_day_metrics(schedule.sections(), day, self.registry, self.config.unit)
    }

    /// Validates, then measures. Rejections carry no metrics.
    #[instrument(skip_all, fields(sections = sections.len()))]
    pub fn evaluate(&self, sections: &[CourseSection]) -> Result<Evaluation> {
        let schedule = self.validate(sections)?;
        let metrics = self.metrics(&schedule)?;
        info!(
            total_gap_minutes = metrics.total_gap_minutes,
            total_distance = metrics.total_distance,
            "schedule evaluated"
        );
        Ok(Evaluation { schedule, metrics })
    }

    /// Distance between two named locations, `None` if either is unknown.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<f64> {
        self.registry.distance_between(from, to, self.config.unit)
    }
}
