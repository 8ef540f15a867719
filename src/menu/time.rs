use chrono::{DateTime, Local, Timelike, Utc};

/// Render a pipeline timestamp for the menu.
///
/// Truncated to whole seconds, converted to the local timezone and
/// formatted with the locale-aware `%c` calendar format.
pub fn normalize_time(created_at: DateTime<Utc>) -> String {
    let truncated = created_at.with_nanosecond(0).unwrap_or(created_at);
    truncated.with_timezone(&Local).format("%c").to_string()
}
