//! Planned time spans.
//!
//! Legs and journeys are both planned intervals of time. This trait
//! captures the shared shape so duration queries can operate over
//! either without caring which one they were given.

use chrono::{DateTime, Duration, Utc};

/// Anything with a planned start and end instant.
///
/// The planned duration is derived from the two instants. Implementors
/// guarantee at construction that the end is not before the start, so
/// `planned_duration` is never negative; zero-length spans are legal.
pub trait TimeSpan {
    /// The instant this span is planned to start.
    fn planned_start(&self) -> DateTime<Utc>;

    /// The instant this span is planned to end.
    fn planned_end(&self) -> DateTime<Utc>;

    /// The planned duration, end minus start.
    fn planned_duration(&self) -> Duration {
        self.planned_end() - self.planned_start()
    }
}
