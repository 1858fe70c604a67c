//! Reusable formatting utilities for CLI output
//!
//! Timestamps, durations and other display values shared by the profile
//! view and the status command.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Long date format used for "member since"
const LONG_DATE: &str = "%B %-d, %Y";

/// Format an account creation timestamp as a long date.
///
/// Accepts RFC 3339, ISO local date-times (with or without fractional
/// seconds), bare dates and Unix epoch milliseconds. Anything else is shown
/// as received; a missing value becomes "N/A".
///
/// # Example output
/// `January 15, 2024`
pub fn format_member_since(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(LONG_DATE).to_string();
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(LONG_DATE).to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(LONG_DATE).to_string();
    }

    if let Ok(millis) = raw.parse::<i64>() {
        if let Some(dt) = DateTime::from_timestamp_millis(millis) {
            return dt.format(LONG_DATE).to_string();
        }
    }

    raw.to_string()
}

/// First character of the username, uppercased, for the avatar badge.
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string())
}

/// Format a remaining lifetime as hours and minutes.
///
/// # Example output
/// - `2h 15m`
/// - `45m`
/// - `expired`
pub fn format_remaining(remaining: chrono::Duration) -> String {
    if remaining <= chrono::Duration::zero() {
        return "expired".to_string();
    }

    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else if mins > 0 {
        format!("{}m", mins)
    } else {
        "<1m".to_string()
    }
}
