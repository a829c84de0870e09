use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Identifier of a point on the campus map.
///
/// Two locations are the same location exactly when their names are equal.
/// Ordering is lexicographic by name, which is the order every search uses
/// to expand neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Location(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Location(name.to_owned())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Location(name)
    }
}

impl From<&Location> for Location {
    fn from(location: &Location) -> Self {
        location.clone()
    }
}

// lets maps keyed by `Location` be queried with a plain `&str`
impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
