//! Date cell rendering
//!
//! Stored date patterns are datepicker patterns. They are translated into
//! chrono's strftime dialect once per distinct pattern and the timestamp is
//! rendered in UTC. Month and day names are English.

use chrono::format::StrftimeItems;
use chrono::{DateTime, Utc};

use crate::cache::translate_cached;
use crate::error::FormatError;
use crate::grammar::{DATEPICKER, STRFTIME};

/// Stored timestamps below this are in seconds, at or above it milliseconds.
const SECONDS_LIMIT: f64 = 100_000_000_000.0;

/// Normalizes a stored timestamp to milliseconds since the Unix epoch.
///
/// Positive values below 1e11 are seconds. Fractional milliseconds are
/// truncated.
pub fn timestamp_millis(value: f64) -> Result<i64, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFiniteTimestamp);
    }
    let millis = if value > 0.0 && value < SECONDS_LIMIT {
        value * 1000.0
    } else {
        value
    };
    Ok(millis.trunc() as i64)
}

/// Renders `millis` in UTC using a datepicker `pattern`.
pub fn format_timestamp(millis: i64, pattern: &str) -> Result<String, FormatError> {
    let datetime = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or(FormatError::TimestampOutOfRange { millis })?;

    // Translated literals have every `%` doubled, so the items are always valid.
    let strftime = translate_cached(pattern, &DATEPICKER, &STRFTIME);
    Ok(datetime
        .format_with_items(StrftimeItems::new(&strftime))
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_seconds_scaled() {
        assert_eq!(timestamp_millis(1_700_000_000.0), Ok(1_700_000_000_000));
        assert_eq!(timestamp_millis(1_700_000_000_000.0), Ok(1_700_000_000_000));
        assert_eq!(timestamp_millis(0.0), Ok(0));
        assert_eq!(timestamp_millis(-5.0), Ok(-5));
    }

    #[test]
    fn test_timestamp_non_finite() {
        assert_eq!(
            timestamp_millis(f64::NAN),
            Err(FormatError::NonFiniteTimestamp)
        );
    }
}
