//! Great-circle distance between campus points.
//!
//! # Algorithm
//! Haversine formula on a spherical Earth:
//!
//! ```text
//! a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)
//! c = 2·atan2(√a, √(1−a))
//! d = R·c
//! ```
//!
//! Inputs are degrees and converted to radians before any trigonometry.
//! The result is straight-line ground distance; walking paths, speed and
//! elevation are not modelled.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky and Telescope 68(2)

use serde::{Deserialize, Serialize};

use crate::models::Location;

/// Unit of every distance the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Mean Earth radius in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => 3959.0,
            DistanceUnit::Kilometers => 6371.0,
        }
    }

    /// Short label for display ("mi", "km").
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Haversine distance between two `(lat, lng)` points given in degrees.
pub fn haversine(from: (f64, f64), to: (f64, f64), unit: DistanceUnit) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    unit.earth_radius() * c
}

/// Distance between two locations.
#[inline]
pub fn location_distance(from: &Location, to: &Location, unit: DistanceUnit) -> f64 {
    haversine((from.lat, from.lng), (to.lat, to.lng), unit)
}

/// Distance between two possibly unresolved locations.
///
/// Returns `None` ("distance unknown") when either side is missing, so an
/// unresolved name is never mistaken for a zero-length walk.
pub fn distance_between(
    from: Option<&Location>,
    to: Option<&Location>,
    unit: DistanceUnit,
) -> Option<f64> {
    Some(location_distance(from?, to?, unit))
}
