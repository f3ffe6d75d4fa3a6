use chrono::{DateTime, Duration, Utc};

/// Compact age of a timestamp, e.g. "14d", "2h", "30m", "5s".
/// Each unit is truncated, never rounded up.
pub fn ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    duration(now - created_at)
}

/// Formats a duration using its largest whole unit.
pub fn duration(elapsed: Duration) -> String {
    if elapsed < Duration::zero() {
        return "0s".to_string();
    }
    if elapsed.num_days() > 0 {
        format!("{}d", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}h", elapsed.num_hours())
    } else if elapsed.num_minutes() > 0 {
        format!("{}m", elapsed.num_minutes())
    } else {
        format!("{}s", elapsed.num_seconds())
    }
}
