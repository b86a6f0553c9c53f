//! Display formatting for epoch-millisecond timestamps.

use chrono::{DateTime, Utc};

fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// `1718000000000` → `"Jun 10, 2024"`. Out-of-range values render as `"-"`.
pub fn format_date_human(millis: i64) -> String {
    from_millis(millis)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Date plus 12-hour UTC time, e.g. `"Jun 10, 2024 6:13 AM"`.
pub fn format_datetime_human(millis: i64) -> String {
    from_millis(millis)
        .map(|dt| dt.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `"1 note"` / `"3 notes"`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
