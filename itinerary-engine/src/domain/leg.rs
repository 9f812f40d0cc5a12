//! Travel leg type.
//!
//! A `Leg` is a single planned travel segment. Its time window is
//! validated at construction and immutable afterwards; only the
//! human-readable description may change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DomainError, TimeSpan};

/// A single planned travel segment.
///
/// The description is display-only: it can be edited after
/// construction and takes no part in equality.
///
/// # Invariants
///
/// - `planned_end >= planned_start` (zero-length legs are legal)
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use itinerary_engine::domain::{Leg, TimeSpan};
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
/// let leg = Leg::new("Paris to Lyon", start, start + Duration::hours(2)).unwrap();
///
/// assert_eq!(leg.description(), "Paris to Lyon");
/// assert_eq!(leg.planned_duration(), Duration::hours(2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    description: String,
    planned_start: DateTime<Utc>,
    planned_end: DateTime<Utc>,
}

impl Leg {
    /// Construct a leg, validating the planned time window.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `planned_end` is before `planned_start`.
    pub fn new(
        description: impl Into<String>,
        planned_start: DateTime<Utc>,
        planned_end: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if planned_end < planned_start {
            return Err(DomainError::EndBeforeStart {
                start: planned_start,
                end: planned_end,
            });
        }

        Ok(Leg {
            description: description.into(),
            planned_start,
            planned_end,
        })
    }

    /// Returns the human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description.
    ///
    /// The description is display-only, so this is the one mutation a
    /// leg permits.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

impl TimeSpan for Leg {
    fn planned_start(&self) -> DateTime<Utc> {
        self.planned_start
    }

    fn planned_end(&self) -> DateTime<Utc> {
        self.planned_end
    }
}

impl PartialEq for Leg {
    fn eq(&self, other: &Self) -> bool {
        // The description is display-only and excluded from equality
        self.planned_start == other.planned_start && self.planned_end == other.planned_end
    }
}

impl Eq for Leg {}
