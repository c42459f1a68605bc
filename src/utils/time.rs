//! Time utilities
//!
//! Contest windows are stored as UTC instants, but the product's wall
//! clock is fixed at UTC+5:30; `now_ist` is the single source of "now"
//! for all contest window comparisons.

use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::constants::CONTEST_CLOCK_OFFSET_SECONDS;

/// Get the current wall-clock time in the fixed contest timezone (UTC+5:30)
pub fn now_ist() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(CONTEST_CLOCK_OFFSET_SECONDS)
        .expect("contest clock offset is a valid fixed offset");
    Utc::now().with_timezone(&offset)
}

/// Parse a datetime string in ISO 8601 / RFC 3339 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Compute the duration of a contest window.
///
/// Returns `None` when the window is empty or inverted, so callers can
/// reject the input as malformed instead of admitting with a negative
/// time budget.
pub fn contest_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Duration> {
    if end <= start {
        return None;
    }
    Some(end - start)
}

/// Contest window duration in whole minutes
pub fn contest_duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<i64> {
    contest_duration(start, end).map(|d| d.num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contest_duration() {
        let start = parse_datetime("2024-01-15T12:00:00Z").unwrap();
        let end = parse_datetime("2024-01-15T14:30:00Z").unwrap();

        let duration = contest_duration(start, end).unwrap();
        assert_eq!(duration.num_minutes(), 150);
        assert_eq!(contest_duration_minutes(start, end), Some(150));
    }

    #[test]
    fn test_contest_duration_rejects_inverted_window() {
        let start = parse_datetime("2024-01-15T14:00:00Z").unwrap();
        let end = parse_datetime("2024-01-15T12:00:00Z").unwrap();

        assert!(contest_duration(start, end).is_none());
        assert!(contest_duration(start, start).is_none());
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T12:00:00Z");
        assert!(dt.is_some());

        let invalid = parse_datetime("not a date");
        assert!(invalid.is_none());
    }

    #[test]
    fn test_ist_offset() {
        let now = now_ist();
        assert_eq!(now.offset().local_minus_utc(), 5 * 3600 + 1800);
        // The instant is the same regardless of offset
        let diff = now.with_timezone(&Utc) - Utc::now();
        assert!(diff.num_seconds().abs() < 5);
    }
}
