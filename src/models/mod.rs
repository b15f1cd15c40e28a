//! Scheduling domain models.
//!
//! Provides the data types the engine works on: wall-clock times, meeting
//! day sets, campus locations, course sections and validated schedules.
//!
//! # Domain Mappings
//!
//! | campus-schedule | Registrar | Map view |
//! |-----------------|-----------|----------|
//! | CourseSection | CRN | Marker |
//! | Location | Building | Marker position |
//! | Schedule | Term timetable | Route polyline |

mod clock;
mod days;
mod location;
mod schedule;
mod section;

pub use clock::{minutes_to_time, time_to_minutes, ClockTime, MINUTES_PER_DAY};
pub use days::{DaySet, Weekday};
pub use location::{Location, LocationRegistry};
pub use schedule::{chronological, Schedule, DAY_START};
pub use section::CourseSection;
