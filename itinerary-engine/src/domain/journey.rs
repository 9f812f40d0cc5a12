//! Journey type.
//!
//! A `Journey` is a travel segment between two named locations. It is
//! the unit the suffering evaluator works over: scoring looks at a
//! route's longest journeys and its departure location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DomainError, Location, TimeSpan};

/// A planned travel segment between two locations.
///
/// # Invariants
///
/// - `planned_end >= planned_start` (zero-length journeys are legal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    departs_from: Location,
    arrives_at: Location,
    planned_start: DateTime<Utc>,
    planned_end: DateTime<Utc>,
}

impl Journey {
    /// Construct a journey, validating the planned time window.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `planned_end` is before `planned_start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use itinerary_engine::domain::{Journey, Location, TimeSpan};
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
    /// let journey = Journey::new(
    ///     Location::parse("Amsterdam Centraal").unwrap(),
    ///     Location::parse("Brussels Midi").unwrap(),
    ///     start,
    ///     start + Duration::hours(2),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(journey.departs_from().as_str(), "Amsterdam Centraal");
    /// assert_eq!(journey.planned_duration(), Duration::hours(2));
    /// ```
    pub fn new(
        departs_from: Location,
        arrives_at: Location,
        planned_start: DateTime<Utc>,
        planned_end: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if planned_end < planned_start {
            return Err(DomainError::EndBeforeStart {
                start: planned_start,
                end: planned_end,
            });
        }

        Ok(Journey {
            departs_from,
            arrives_at,
            planned_start,
            planned_end,
        })
    }

    /// Returns the departure location.
    pub fn departs_from(&self) -> &Location {
        &self.departs_from
    }

    /// Returns the arrival location.
    pub fn arrives_at(&self) -> &Location {
        &self.arrives_at
    }
}

impl TimeSpan for Journey {
    fn planned_start(&self) -> DateTime<Utc> {
        self.planned_start
    }

    fn planned_end(&self) -> DateTime<Utc> {
        self.planned_end
    }
}
