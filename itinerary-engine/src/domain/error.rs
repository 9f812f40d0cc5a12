//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from the ranking and tracking errors raised by
//! the modules that consume these types.

use chrono::{DateTime, Utc};

/// Domain-level errors for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A planned time window ends before it starts
    #[error("planned end {end} is before planned start {start}")]
    EndBeforeStart {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn error_display() {
        let start = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();

        let err = DomainError::EndBeforeStart { start, end };
        assert_eq!(
            err.to_string(),
            "planned end 2024-03-15 10:00:00 UTC is before planned start 2024-03-15 12:00:00 UTC"
        );
    }
}
