//! Common display utilities and helpers

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Placeholder for missing values
pub const NONE: &str = "-";

/// Truncate string to max length (in characters) with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render a backend date as `YYYY-MM-DD`.
///
/// The gateway sends zone-less ISO datetimes (`2024-05-02T10:00:00`) or plain
/// dates; anything else is shown as-is.
pub fn format_date(value: &str) -> String {
    if let Ok(dt) = value.parse::<DateTime<Utc>>() {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    value.to_string()
}

/// Optional value or the placeholder
pub fn or_none(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NONE)
        .to_string()
}
