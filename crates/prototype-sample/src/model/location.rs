use prototype_framework::Prototype;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where a store is. Nested inside both store variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub sector: String,
    pub city: String,
}

/// Payload for updating a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub sector: Option<String>,
    pub city: Option<String>,
}

impl Location {
    pub fn new(sector: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            sector: sector.into(),
            city: city.into(),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.sector, self.city)
    }
}

impl Prototype for Location {
    type Patch = LocationUpdate;

    fn apply(&mut self, update: LocationUpdate) {
        if let Some(sector) = update.sector {
            self.sector = sector;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
    }
}
