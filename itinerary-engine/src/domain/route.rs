//! Route type.
//!
//! A `Route` is one itinerary option: an ordered sequence of journeys,
//! in travel order. Routes with no journeys are legal; they simply
//! have no departure location.

use serde::{Deserialize, Serialize};

use super::{Journey, Location};

/// An ordered sequence of journeys composing one itinerary option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    journeys: Vec<Journey>,
}

impl Route {
    /// Construct a route from journeys in travel order.
    pub fn new(journeys: Vec<Journey>) -> Self {
        Route { journeys }
    }

    /// Construct a route with no journeys.
    pub fn empty() -> Self {
        Route::default()
    }

    /// Returns the journeys in travel order.
    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }

    /// Returns the departure location of the route.
    ///
    /// This is the start location of the first journey; an empty route
    /// has no departure location.
    pub fn departs_from(&self) -> Option<&Location> {
        self.journeys.first().map(Journey::departs_from)
    }

    /// Returns the number of journeys.
    pub fn len(&self) -> usize {
        self.journeys.len()
    }

    /// Returns true if the route has no journeys.
    pub fn is_empty(&self) -> bool {
        self.journeys.is_empty()
    }
}

impl FromIterator<Journey> for Route {
    fn from_iter<I: IntoIterator<Item = Journey>>(iter: I) -> Self {
        Route::new(iter.into_iter().collect())
    }
}
