//! Duration queries over legs and journeys.
//!
//! Itinerary display flags segments that take "too long". The query
//! here answers that in one pass: find the longest planned span in a
//! collection, and report it only when it is strictly over a threshold.

use chrono::Duration;

use crate::domain::TimeSpan;

/// Find the longest span in `items`, if it is strictly longer than
/// `threshold`.
///
/// Returns `None` when `items` is empty, or when even the longest span
/// is at or under the threshold. A span exactly equal to the threshold
/// does not qualify. When several spans share the maximal duration, the
/// first in input order is chosen.
///
/// The input is never mutated; a single O(n) pass, no sorting.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use itinerary_engine::domain::Leg;
/// use itinerary_engine::duration::longest_over;
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
/// let legs = vec![
///     Leg::new("short hop", start, start + Duration::hours(1)).unwrap(),
///     Leg::new("long haul", start, start + Duration::hours(24)).unwrap(),
/// ];
///
/// let flagged = longest_over(&legs, Duration::hours(6)).unwrap();
/// assert_eq!(flagged.description(), "long haul");
///
/// // Nothing is over a full day
/// assert!(longest_over(&legs, Duration::hours(24)).is_none());
/// ```
pub fn longest_over<T: TimeSpan>(items: &[T], threshold: Duration) -> Option<&T> {
    let mut longest: Option<&T> = None;

    for item in items {
        match longest {
            // Strictly greater, so the first of equals wins
            Some(so_far) if item.planned_duration() <= so_far.planned_duration() => {}
            _ => longest = Some(item),
        }
    }

    longest.filter(|item| item.planned_duration() > threshold)
}
