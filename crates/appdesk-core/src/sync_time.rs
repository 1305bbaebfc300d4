//! Human-readable "last synchronised" labels

use chrono::{DateTime, Local};

/// Elapsed time since `last_sync`, relative to `now`.
///
/// - under a minute: `just now`
/// - under an hour: `<n>min ago`
/// - under a day: `<n>h ago`
/// - otherwise the calendar date of `last_sync`
pub fn format_last_sync(last_sync: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = (now - last_sync).num_seconds();

    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}min ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        last_sync.format("%Y-%m-%d").to_string()
    }
}
