//! Publication date parsing.
//!
//! Dates come from hand-written metadata and HTML, so several common
//! notations are accepted. Values without an offset are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// `%B` also accepts the abbreviated month name
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Parse a date/time string, returning `None` for blank or unrecognized input.
///
/// Accepted, in order: RFC 3339, RFC 2822, naive date-times
/// (`2025-01-01T10:30:00`, `2025-01-01 10:30`), and plain dates
/// (`2025-01-01`, `2025/01/01`, `January 1, 2025`, `1 Jan 2025`; midnight UTC).
///
/// ```rust
/// use postdex_content::date::parse_date;
///
/// let date = parse_date("2025-01-01").unwrap();
/// assert_eq!(date.to_rfc3339(), "2025-01-01T00:00:00+00:00");
/// assert!(parse_date("next tuesday").is_none());
/// ```
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(value, format) {
            return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    log::debug!("Unrecognized date '{value}', leaving it unset");
    None
}
