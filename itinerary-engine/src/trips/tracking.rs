//! Which trip is a customer on right now?
//!
//! Support staff answer calls from travelling customers, so they need
//! the one booked trip a customer is currently on. Several booked trips
//! overlapping the same instant is a data-quality problem that must
//! surface rather than be resolved by an arbitrary pick.

use chrono::{DateTime, Utc};

use super::Trips;
use crate::domain::{BookingStatus, Trip};

/// Errors answering the current-trip question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    /// The customer has several booked trips active at once
    #[error("unexpectedly more than one current trip for {customer_id}")]
    MultipleCurrentTrips { customer_id: String },
}

/// Looks up the trip a customer is currently on.
#[derive(Debug, Clone)]
pub struct Tracking<T> {
    trips: T,
}

impl<T: Trips> Tracking<T> {
    /// Create a tracker over a trip store.
    pub fn new(trips: T) -> Self {
        Self { trips }
    }

    /// The booked trip the customer is on at `at`, if any.
    ///
    /// Trips that are merely proposed, or already cancelled, are not
    /// current even when their planned window contains `at`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::MultipleCurrentTrips`] if more than one
    /// booked trip is active at `at`.
    pub fn current_trip_for(
        &self,
        customer_id: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<Trip>, TrackingError> {
        let mut booked = self
            .trips
            .current_trips_for(customer_id, at)
            .into_iter()
            .filter(|trip| trip.booking_status() == BookingStatus::Booked);

        match (booked.next(), booked.next()) {
            (only, None) => Ok(only),
            _ => Err(TrackingError::MultipleCurrentTrips {
                customer_id: customer_id.to_string(),
            }),
        }
    }
}
