//! Location names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid location name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// A named place a journey departs from or arrives at.
///
/// Location names are non-empty and carry no surrounding whitespace.
/// This type guarantees that any `Location` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use itinerary_engine::domain::Location;
///
/// let berlin = Location::parse("Berlin Hbf").unwrap();
/// assert_eq!(berlin.as_str(), "Berlin Hbf");
///
/// // Empty and blank names are rejected
/// assert!(Location::parse("").is_err());
/// assert!(Location::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Parse a location name from a string.
    ///
    /// The input must be non-empty and must not start or end with
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        if s.is_empty() {
            return Err(InvalidLocation {
                reason: "name must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidLocation {
                reason: "name must not have surrounding whitespace",
            });
        }

        Ok(Location(s.to_string()))
    }

    /// Returns the location name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Location {
    type Error = InvalidLocation;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Location::parse(&s)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> String {
        location.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
