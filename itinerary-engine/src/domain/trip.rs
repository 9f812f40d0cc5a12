//! Trip type.
//!
//! A `Trip` is a customer's booking of travel over a planned time
//! window. Trips are immutable after creation and compare structurally,
//! so a repository can hold them in sets without duplicate bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Where a trip is in its booking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Proposed to the customer, not yet confirmed
    Proposed,
    /// Confirmed and paid for
    Booked,
    /// Cancelled after booking
    Cancelled,
}

/// A customer's trip over a planned time window.
///
/// # Invariants
///
/// - `planned_end >= planned_start` (a trip can start and end at the
///   same instant)
/// - Owned by exactly one customer, identified by an opaque string id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip {
    customer_id: String,
    planned_start: DateTime<Utc>,
    planned_end: DateTime<Utc>,
    booking_status: BookingStatus,
}

impl Trip {
    /// Construct a trip, validating the planned time window.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `planned_end` is before `planned_start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use itinerary_engine::domain::{BookingStatus, Trip};
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
    /// let trip = Trip::new("cust-42", start, start + Duration::days(7), BookingStatus::Booked)
    ///     .unwrap();
    ///
    /// assert!(trip.is_planned_to_be_active_at(start + Duration::days(3)));
    /// assert!(!trip.is_planned_to_be_active_at(start + Duration::days(8)));
    /// ```
    pub fn new(
        customer_id: impl Into<String>,
        planned_start: DateTime<Utc>,
        planned_end: DateTime<Utc>,
        booking_status: BookingStatus,
    ) -> Result<Self, DomainError> {
        if planned_end < planned_start {
            return Err(DomainError::EndBeforeStart {
                start: planned_start,
                end: planned_end,
            });
        }

        Ok(Trip {
            customer_id: customer_id.into(),
            planned_start,
            planned_end,
            booking_status,
        })
    }

    /// Returns the id of the customer who owns this trip.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Returns the instant the trip is planned to start.
    pub fn planned_start(&self) -> DateTime<Utc> {
        self.planned_start
    }

    /// Returns the instant the trip is planned to end.
    pub fn planned_end(&self) -> DateTime<Utc> {
        self.planned_end
    }

    /// Returns the booking status.
    pub fn booking_status(&self) -> BookingStatus {
        self.booking_status
    }

    /// Returns true if the trip's planned window contains `at`.
    ///
    /// Both boundaries are inclusive: a trip is active at the instant
    /// it starts and at the instant it ends.
    pub fn is_planned_to_be_active_at(&self, at: DateTime<Utc>) -> bool {
        self.planned_start <= at && at <= self.planned_end
    }
}
