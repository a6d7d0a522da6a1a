//! Launch date parsing.
//!
//! Clients submit launch dates as free-form strings, typically straight from a date input
//! (`2028-01-04`) or written out long-form (`January 4, 2028`). Dates without an explicit
//! offset are taken to be UTC, dates without a time are taken to be midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::server::error::launch::LaunchError;

static DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

static DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Parses a client supplied launch date into a UTC timestamp.
///
/// Formats are tried in order: RFC 3339, RFC 2822, ISO date-time without offset, then the
/// date-only formats in [`DATE_FORMATS`]. Month names may be full or abbreviated.
///
/// # Arguments
/// - `raw` - The launch date exactly as submitted
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The parsed launch date
/// - `Err(LaunchError::InvalidLaunchDate)` - None of the accepted formats matched
pub fn parse_launch_date(raw: &str) -> Result<DateTime<Utc>, LaunchError> {
    let value = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    Err(LaunchError::InvalidLaunchDate(raw.to_string()))
}
