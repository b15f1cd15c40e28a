//! Campus locations and the registry that resolves them by name.
//!
//! The registry is read-only configuration handed to the engine. Nothing
//! in the crate mutates it after construction.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, ScheduleError};
use crate::geodistance::{self, DistanceUnit};

/// A named campus point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier, usually the building name.
    pub name: String,
    /// Latitude in degrees (-90..90).
    pub lat: f64,
    /// Longitude in degrees (-180..180).
    pub lng: f64,
    /// Display color for map markers. Not used by any computation.
    #[serde(default)]
    pub color: String,
}

impl Location {
    /// Creates a location with no display color.
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            color: String::new(),
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Checks the coordinate ranges.
    pub fn check(&self) -> Result<()> {
        let invalid = |reason: String| ScheduleError::InvalidLocation {
            name: self.name.clone(),
            reason,
        };
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(invalid(format!("latitude {} out of range", self.lat)));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(invalid(format!("longitude {} out of range", self.lng)));
        }
        Ok(())
    }
}

/// Registry entry as it appears in JSON, keyed by name.
#[derive(Deserialize)]
struct LocationEntry {
    lat: f64,
    lng: f64,
    #[serde(default)]
    color: String,
}

/// The registry JSON object in document order, repeated keys included.
struct LocationEntries(Vec<Location>);

impl<'de> Deserialize<'de> for LocationEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = LocationEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of location names to coordinates")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut locations = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, entry)) = map.next_entry::<String, LocationEntry>()? {
                    locations.push(Location {
                        name,
                        lat: entry.lat,
                        lng: entry.lng,
                        color: entry.color,
                    });
                }
                Ok(LocationEntries(locations))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Immutable lookup table from location name to [`Location`].
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: BTreeMap<String, Location>,
}

impl LocationRegistry {
    /// Builds a registry, rejecting duplicate names and bad coordinates.
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for loc in locations {
            loc.check()?;
            if map.contains_key(&loc.name) {
                return Err(ScheduleError::DuplicateLocation(loc.name));
            }
            map.insert(loc.name.clone(), loc);
        }
        Ok(Self { locations: map })
    }

    /// Loads a registry from a JSON object of the form
    /// `{"<name>": {"lat": .., "lng": .., "color": ".."}}`.
    ///
    /// A name repeated within the object is a duplicate, as in [`new`](Self::new).
    pub fn from_json(json: &str) -> Result<Self> {
        let LocationEntries(locations) = serde_json::from_str(json)?;
        Self::new(locations)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Great-circle distance between two named locations.
    ///
    /// `None` if either name is not registered.
    pub fn distance_between(&self, from: &str, to: &str, unit: DistanceUnit) -> Option<f64> {
        geodistance::distance_between(self.get(from), self.get(to), unit)
    }
}
