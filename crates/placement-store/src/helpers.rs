//! Row value parsing helpers.
//!
//! The table API returns `date` columns as `"2025-01-15"` but some
//! deployments declare `posted_date` as a timestamp, so both shapes are
//! accepted.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::StoreError;

/// Parse a date column. Accepts `YYYY-MM-DD`, RFC 3339, or `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
///
/// Returns `StoreError::Decode` if the string matches none of the formats.
pub fn parse_date(s: &str) -> Result<NaiveDate, StoreError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_datetime(s).map(|dt| dt.date_naive())
}

/// Parse a timestamp column as `DateTime<Utc>`.
///
/// Handles RFC 3339 (`"2025-02-09T14:30:00+00:00"`) and the space-separated
/// form without offset (`"2025-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `StoreError::Decode` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| StoreError::Decode(format!("Failed to parse date '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_plain_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
    }

    #[rstest]
    #[case("2025-01-15T23:10:00.123456+00:00")]
    #[case("2025-01-15T00:00:00Z")]
    #[case("2025-01-15 08:00:00")]
    #[case(" 2025-01-15 ")]
    fn parses_timestamp_shapes_as_date(#[case] input: &str) {
        assert_eq!(
            parse_date(input).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_date("last tuesday").unwrap_err();
        assert!(err.to_string().contains("last tuesday"));
    }
}
