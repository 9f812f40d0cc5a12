//! Suffering scores for routes.
//!
//! Long journeys make a route unpleasant, and some departure points
//! are worse than others. The scoring formula itself is a business
//! rule supplied by the caller; this module fixes what the formula is
//! fed (a route's longest journeys and its departure location) and how
//! its result decides which routes are worth showing.

use tracing::debug;

use crate::domain::{Journey, Location, Route, TimeSpan};

/// Scores above this ceiling mark a route as unbearable.
pub const DEFAULT_BEARABLE_CEILING: i32 = 10;

/// How many of a route's longest journeys the scorer is shown.
const LONGEST_JOURNEY_COUNT: usize = 3;

/// Score of a route with no journeys, which has nothing to suffer.
const BASELINE_SCORE: i32 = 0;

/// The externally supplied scoring formula.
///
/// Implementations must be deterministic and side-effect-free: the
/// evaluator calls the scorer once per route and assumes equal inputs
/// produce equal scores. Errors are propagated to the caller unchanged;
/// the evaluator never retries, substitutes a fallback score, or drops
/// the failing route from a batch.
///
/// Any `Fn(&[Journey], &Location) -> Result<i32, E>` is a scorer, so a
/// plain function works:
///
/// ```
/// use itinerary_engine::domain::{Journey, Location};
/// use itinerary_engine::suffering::SufferingEvaluator;
///
/// fn by_journey_count(longest: &[Journey], _from: &Location) -> Result<i32, String> {
///     Ok(longest.len() as i32)
/// }
///
/// let evaluator = SufferingEvaluator::new(by_journey_count);
/// ```
pub trait SufferScorer {
    type Error;

    /// Score a route from its longest journeys and departure location.
    fn score(
        &self,
        longest_journeys: &[Journey],
        departs_from: &Location,
    ) -> Result<i32, Self::Error>;
}

impl<F, E> SufferScorer for F
where
    F: Fn(&[Journey], &Location) -> Result<i32, E>,
{
    type Error = E;

    fn score(&self, longest_journeys: &[Journey], departs_from: &Location) -> Result<i32, E> {
        self(longest_journeys, departs_from)
    }
}

/// Supplier of the candidate routes for an itinerary.
///
/// Ordering is significant: it is the display priority, and the
/// bearable-route filter preserves it. Errors propagate to the caller
/// unchanged.
pub trait RouteSource {
    type Error;

    /// The candidate routes for an itinerary, in display order.
    fn routes_for(&self, itinerary_id: &str) -> Result<Vec<Route>, Self::Error>;
}

/// The top `limit` journeys by descending planned duration.
///
/// The result is a new list; the input is untouched. Ties keep their
/// original relative order, so of two equally long journeys the one
/// travelled first sorts first.
pub fn longest_journeys(journeys: &[Journey], limit: usize) -> Vec<Journey> {
    let mut sorted = journeys.to_vec();
    // Stable sort: equal durations keep travel order
    sorted.sort_by(|a, b| b.planned_duration().cmp(&a.planned_duration()));
    sorted.truncate(limit);
    sorted
}

/// Evaluates how much a route makes its traveller suffer.
///
/// Wraps an externally supplied [`SufferScorer`] and applies the fixed
/// parts of the policy: which journeys the scorer sees, the baseline
/// for empty routes, and the bearability ceiling.
#[derive(Debug, Clone)]
pub struct SufferingEvaluator<S> {
    scorer: S,
    ceiling: i32,
}

impl<S: SufferScorer> SufferingEvaluator<S> {
    /// Create an evaluator with the default ceiling of
    /// [`DEFAULT_BEARABLE_CEILING`].
    pub fn new(scorer: S) -> Self {
        Self::with_ceiling(scorer, DEFAULT_BEARABLE_CEILING)
    }

    /// Create an evaluator with a non-default ceiling.
    pub fn with_ceiling(scorer: S, ceiling: i32) -> Self {
        Self { scorer, ceiling }
    }

    /// Returns the bearability ceiling.
    pub fn ceiling(&self) -> i32 {
        self.ceiling
    }

    /// The suffering score of a route.
    ///
    /// Feeds the scorer the route's three longest journeys and its
    /// departure location. An empty route has no departure location and
    /// scores the baseline of zero without consulting the scorer.
    ///
    /// # Errors
    ///
    /// Any error from the scorer, unchanged.
    pub fn suffer_score(&self, route: &Route) -> Result<i32, S::Error> {
        let Some(departs_from) = route.departs_from() else {
            return Ok(BASELINE_SCORE);
        };

        let longest = longest_journeys(route.journeys(), LONGEST_JOURNEY_COUNT);
        self.scorer.score(&longest, departs_from)
    }

    /// Whether a route's suffering score is at or under the ceiling.
    ///
    /// # Errors
    ///
    /// Any error from the scorer, unchanged.
    pub fn is_bearable(&self, route: &Route) -> Result<bool, S::Error> {
        Ok(self.suffer_score(route)? <= self.ceiling)
    }

    /// The bearable routes, in their original order.
    ///
    /// Survivors are clones; the caller's slice is untouched and never
    /// reordered.
    ///
    /// # Errors
    ///
    /// The first scorer error fails the whole call: a single route the
    /// scorer cannot price means the batch is suspect, and silently
    /// dropping it would hide a data-quality problem.
    pub fn bearable_routes(&self, routes: &[Route]) -> Result<Vec<Route>, S::Error> {
        let mut bearable = Vec::with_capacity(routes.len());

        for route in routes {
            if self.is_bearable(route)? {
                bearable.push(route.clone());
            }
        }

        debug!(
            candidates = routes.len(),
            bearable = bearable.len(),
            "filtered routes by suffering score"
        );

        Ok(bearable)
    }

    /// The routes worth showing for an itinerary: the source's routes,
    /// filtered to the bearable ones, in the source's order.
    ///
    /// # Errors
    ///
    /// Any error from the route source or the scorer, unchanged.
    pub fn routes_to_show_for<R>(
        &self,
        routes: &R,
        itinerary_id: &str,
    ) -> Result<Vec<Route>, S::Error>
    where
        R: RouteSource<Error = S::Error>,
    {
        let candidates = routes.routes_for(itinerary_id)?;
        self.bearable_routes(&candidates)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn journeys_strategy() -> impl Strategy<Value = Vec<Journey>> {
        let start = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        prop::collection::vec(0i64..1_000, 0..12).prop_map(move |minutes| {
            minutes
                .into_iter()
                .enumerate()
                .map(|(i, m)| {
                    Journey::new(
                        Location::parse(&format!("from {i}")).unwrap(),
                        Location::parse(&format!("to {i}")).unwrap(),
                        start,
                        start + Duration::minutes(m),
                    )
                    .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        /// The result is sorted by descending duration and no longer
        /// than the limit.
        #[test]
        fn longest_sorted_and_bounded(journeys in journeys_strategy(), limit in 0usize..6) {
            let longest = longest_journeys(&journeys, limit);

            prop_assert!(longest.len() <= limit);
            prop_assert!(longest.len() <= journeys.len());

            for pair in longest.windows(2) {
                prop_assert!(pair[0].planned_duration() >= pair[1].planned_duration());
            }
        }

        /// Nothing left out is longer than anything taken.
        #[test]
        fn longest_dominates_the_rest(journeys in journeys_strategy()) {
            let longest = longest_journeys(&journeys, 3);

            if let Some(shortest_taken) = longest.last() {
                let longer_than_cut = journeys
                    .iter()
                    .filter(|j| j.planned_duration() > shortest_taken.planned_duration())
                    .count();
                prop_assert!(longer_than_cut < longest.len());
            }
        }

        /// Bearable filtering is an order-preserving subsequence of the
        /// input containing exactly the routes at or under the ceiling.
        #[test]
        fn bearable_is_order_preserving_subsequence(
            durations in prop::collection::vec(0i64..1_000, 0..8),
        ) {
            let start = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
            let routes: Vec<Route> = durations
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    Route::new(vec![Journey::new(
                        Location::parse(&format!("origin {i}")).unwrap(),
                        Location::parse("dest").unwrap(),
                        start,
                        start + Duration::minutes(*m),
                    )
                    .unwrap()])
                })
                .collect();

            // Score: total minutes of the longest journeys, scaled down
            fn scorer(longest: &[Journey], _from: &Location) -> Result<i32, ()> {
                let total: i64 = longest
                    .iter()
                    .map(|j| j.planned_duration().num_minutes())
                    .sum();
                Ok((total / 100) as i32)
            }

            let evaluator = SufferingEvaluator::new(scorer);
            let shown = evaluator.bearable_routes(&routes).unwrap();

            let expected: Vec<Route> = routes
                .iter()
                .filter(|r| evaluator.suffer_score(r).unwrap() <= evaluator.ceiling())
                .cloned()
                .collect();
            prop_assert_eq!(shown, expected);
        }
    }
}
