//! "Member since" date formatting.

#[cfg(test)]
#[path = "member_since_test.rs"]
mod member_since_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Format an ISO 8601 `created_at` as `M/D/YYYY`, in the timestamp's own
/// offset. Returns `None` when the value does not parse.
#[must_use]
pub fn format_member_since(created_at: &str) -> Option<String> {
    let raw = created_at.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z").map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(format!("{}/{}/{}", date.month(), date.day(), date.year()))
}
