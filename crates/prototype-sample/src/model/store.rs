//! Store records in two flavours that differ only in how they hold their [`Location`].
//!
//! | Type | Location field | `clone()` |
//! |------|----------------|-----------|
//! | [`ShallowStore`] | `Shared<Location>` | Shares the location with the prototype |
//! | [`DeepStore`] | `Location` | Gives the copy its own location |

use crate::model::{Location, LocationUpdate};
use prototype_framework::{Prototype, Shared};
use serde::{Deserialize, Serialize};

/// Payload for updating either store flavour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreUpdate {
    pub name: Option<String>,
    pub location: Option<LocationUpdate>,
}

/// A store whose clones share one location.
///
/// The name is copied by value; the location handle is copied by reference. Moving the
/// location of any copy moves it for every copy, including the prototype.
#[derive(Debug, Clone, PartialEq)]
pub struct ShallowStore {
    pub name: String,
    pub location: Shared<Location>,
}

impl ShallowStore {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location: Shared::new(location),
        }
    }

    /// Builds a deep store that owns a snapshot of the current shared location.
    pub fn deepen(&self) -> DeepStore {
        DeepStore {
            name: self.name.clone(),
            location: self.location.snapshot(),
        }
    }
}

impl Prototype for ShallowStore {
    type Patch = StoreUpdate;

    /// A location update goes through the shared handle, so every copy sees it.
    fn apply(&mut self, update: StoreUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(location) = update.location {
            self.location.borrow_mut().apply(location);
        }
    }
}

/// A store that exclusively owns its location.
///
/// `clone()` recurses into the location, so a copy can be moved without touching the
/// prototype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepStore {
    pub name: String,
    pub location: Location,
}

impl DeepStore {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// Gives up exclusive ownership, producing a store whose clones will share the location.
    pub fn share(self) -> ShallowStore {
        ShallowStore {
            name: self.name,
            location: Shared::new(self.location),
        }
    }
}

impl Prototype for DeepStore {
    type Patch = StoreUpdate;

    fn apply(&mut self, update: StoreUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(location) = update.location {
            self.location.apply(location);
        }
    }
}
