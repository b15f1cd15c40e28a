//! Course schedule validation and walking-route metrics.
//!
//! Given one candidate set of course sections, decides whether any two
//! conflict in time and, for a conflict-free set, measures how efficient
//! the resulting day is: idle minutes between consecutive classes and the
//! straight-line walking distance between their buildings.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ClockTime`, `DaySet`, `Location`,
//!   `LocationRegistry`, `CourseSection`, `Schedule`
//! - **`validation`**: Pairwise overlap detection and accept/reject
//! - **`geodistance`**: Haversine great-circle distance
//! - **`metrics`**: Chronological gap/distance aggregation
//! - **`engine`**: Validation + metrics behind injected configuration
//! - **`catalog`**: Course reference table and `CODE NUMBER section N` requests
//!
//! # Scope
//!
//! The engine judges one fixed candidate set. It does not search
//! alternative section choices, and it measures distance, not travel time.
//!
//! # References
//!
//! - Allen (1983), "Maintaining Knowledge about Temporal Intervals"
//! - Sinnott (1984), "Virtues of the Haversine"

pub mod catalog;
pub mod engine;
pub mod error;
pub mod geodistance;
pub mod metrics;
pub mod models;
pub mod validation;

pub use error::{ErrorKind, Result, ScheduleError};
