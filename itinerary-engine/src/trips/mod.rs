//! Trip storage keyed by customer.
//!
//! An append-only, in-memory store of each customer's trips, plus the
//! time-window query customer-facing flows need: "which of this
//! customer's trips are active right now?"

mod tracking;

pub use tracking::{Tracking, TrackingError};

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::Trip;

/// Read access to a customer's trips.
pub trait Trips {
    /// All trips belonging to a customer.
    ///
    /// Unknown customers have an empty set of trips; this is not an
    /// error.
    fn trips_for(&self, customer_id: &str) -> HashSet<Trip>;

    /// The customer's trips whose planned window contains `at`.
    ///
    /// Both window boundaries are inclusive.
    fn current_trips_for(&self, customer_id: &str, at: DateTime<Utc>) -> HashSet<Trip> {
        self.trips_for(customer_id)
            .into_iter()
            .filter(|trip| trip.is_planned_to_be_active_at(at))
            .collect()
    }
}

/// Thread-safe in-memory trip store.
///
/// Cloning shares the underlying store, so one repository can be
/// handed to several owners. Writers and readers synchronize on a
/// single lock; reads hand back defensive copies, so no caller ever
/// observes a partially updated set or mutates internal state.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use itinerary_engine::domain::{BookingStatus, Trip};
/// use itinerary_engine::trips::{InMemoryTrips, Trips};
///
/// let start = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
/// let trip = Trip::new("abc", start, start + Duration::hours(2), BookingStatus::Booked).unwrap();
///
/// let repository = InMemoryTrips::new();
/// repository.add_trip(trip.clone());
///
/// assert!(repository.trips_for("abc").contains(&trip));
/// assert!(repository.trips_for("nobody").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrips {
    inner: Arc<RwLock<HashMap<String, HashSet<Trip>>>>,
}

impl InMemoryTrips {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trip into its customer's set.
    ///
    /// Idempotent: re-adding a structurally equal trip leaves the set
    /// unchanged.
    pub fn add_trip(&self, trip: Trip) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let existing = guard.entry(trip.customer_id().to_string()).or_default();
        if !existing.insert(trip) {
            debug!("trip already stored; add ignored");
        }
    }
}

impl Trips for InMemoryTrips {
    fn trips_for(&self, customer_id: &str) -> HashSet<Trip> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(customer_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingStatus;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, hour, min, 0).unwrap()
    }

    fn trip(customer: &str, start: (u32, u32), end: (u32, u32)) -> Trip {
        Trip::new(
            customer,
            at(start.0, start.1),
            at(end.0, end.1),
            BookingStatus::Booked,
        )
        .unwrap()
    }

    #[test]
    fn unknown_customer_has_no_trips() {
        let repository = InMemoryTrips::new();

        assert!(repository.trips_for("nobody").is_empty());
        assert!(repository.current_trips_for("nobody", at(12, 0)).is_empty());
    }

    #[test]
    fn added_trip_is_returned() {
        let repository = InMemoryTrips::new();
        let t = trip("abc", (10, 0), (12, 0));

        repository.add_trip(t.clone());

        assert_eq!(repository.trips_for("abc"), HashSet::from([t]));
    }

    #[test]
    fn add_is_idempotent() {
        let repository = InMemoryTrips::new();
        let t = trip("abc", (10, 0), (12, 0));

        repository.add_trip(t.clone());
        repository.add_trip(t.clone());

        assert_eq!(repository.trips_for("abc").len(), 1);
    }

    #[test]
    fn customers_are_separate() {
        let repository = InMemoryTrips::new();
        let alices = trip("alice", (10, 0), (12, 0));
        let bobs = trip("bob", (10, 0), (12, 0));

        repository.add_trip(alices.clone());
        repository.add_trip(bobs.clone());

        assert_eq!(repository.trips_for("alice"), HashSet::from([alices]));
        assert_eq!(repository.trips_for("bob"), HashSet::from([bobs]));
    }

    #[test]
    fn current_trips_respect_the_window() {
        let repository = InMemoryTrips::new();
        let t = trip("abc", (10, 0), (12, 0));
        repository.add_trip(t.clone());

        assert_eq!(
            repository.current_trips_for("abc", at(11, 0)),
            HashSet::from([t])
        );
        assert!(repository.current_trips_for("abc", at(13, 0)).is_empty());
        assert!(repository.current_trips_for("abc", at(9, 59)).is_empty());
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let repository = InMemoryTrips::new();
        let t = trip("abc", (10, 0), (12, 0));
        repository.add_trip(t);

        assert_eq!(repository.current_trips_for("abc", at(10, 0)).len(), 1);
        assert_eq!(repository.current_trips_for("abc", at(12, 0)).len(), 1);
    }

    #[test]
    fn only_matching_trips_are_current() {
        let repository = InMemoryTrips::new();
        let morning = trip("abc", (8, 0), (9, 0));
        let afternoon = trip("abc", (14, 0), (18, 0));
        repository.add_trip(morning);
        repository.add_trip(afternoon.clone());

        assert_eq!(
            repository.current_trips_for("abc", at(15, 0)),
            HashSet::from([afternoon])
        );
    }

    #[test]
    fn returned_set_is_a_defensive_copy() {
        let repository = InMemoryTrips::new();
        repository.add_trip(trip("abc", (10, 0), (12, 0)));

        let mut copy = repository.trips_for("abc");
        copy.clear();

        assert_eq!(repository.trips_for("abc").len(), 1);
    }

    #[test]
    fn clones_share_the_store() {
        let repository = InMemoryTrips::new();
        let handle = repository.clone();

        handle.add_trip(trip("abc", (10, 0), (12, 0)));

        assert_eq!(repository.trips_for("abc").len(), 1);
    }

    #[test]
    fn concurrent_adds_lose_nothing() {
        let repository = InMemoryTrips::new();

        std::thread::scope(|scope| {
            for minute in 0..8u32 {
                let handle = repository.clone();
                scope.spawn(move || {
                    for customer in ["alice", "bob"] {
                        handle.add_trip(trip(customer, (10, minute), (12, 0)));
                    }
                });
            }
        });

        assert_eq!(repository.trips_for("alice").len(), 8);
        assert_eq!(repository.trips_for("bob").len(), 8);
    }
}
