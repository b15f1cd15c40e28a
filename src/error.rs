//! Error type shared by every module of the crate.

use thiserror::Error;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Everything that can go wrong while building, validating or measuring
/// a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Two sections share a day and an intersecting time window.
    #[error("sections {first} and {second} have overlapping times")]
    Overlap { first: u32, second: u32 },

    /// A section names a location missing from the registry.
    #[error("section {crn} is held at unknown location '{location}'")]
    UnresolvedLocation { crn: u32, location: String },

    /// A section breaks its own invariants (empty days, start not before end).
    #[error("section {crn} is invalid: {reason}")]
    InvalidSection { crn: u32, reason: String },

    #[error("invalid time '{0}', expected 24-hour HH:MM")]
    InvalidTime(String),

    #[error("invalid meeting days '{0}', expected letters from M T W Th F")]
    InvalidDays(String),

    #[error("location '{name}' is invalid: {reason}")]
    InvalidLocation { name: String, reason: String },

    #[error("duplicate location '{0}'")]
    DuplicateLocation(String),

    /// A request line does not match `CODE NUMBER section N`.
    #[error("Invalid format: \"{0}\". Use \"CS 1010 section 01\"")]
    InvalidRequest(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Section {section} not available for {course}")]
    SectionUnavailable { section: String, course: String },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`ScheduleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The candidate set has a time conflict.
    Overlap,
    /// A distance could not be computed.
    UnresolvedLocation,
    /// Malformed section, time, day or location data.
    InvalidInput,
    /// A request could not be resolved against the course catalog.
    Catalog,
}

impl ScheduleError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::Overlap { .. } => ErrorKind::Overlap,
            ScheduleError::UnresolvedLocation { .. } => ErrorKind::UnresolvedLocation,
            ScheduleError::InvalidSection { .. }
            | ScheduleError::InvalidTime(_)
            | ScheduleError::InvalidDays(_)
            | ScheduleError::InvalidLocation { .. }
            | ScheduleError::DuplicateLocation(_)
            | ScheduleError::Json(_) => ErrorKind::InvalidInput,
            ScheduleError::InvalidRequest(_)
            | ScheduleError::CourseNotFound(_)
            | ScheduleError::SectionUnavailable { .. } => ErrorKind::Catalog,
        }
    }
}
