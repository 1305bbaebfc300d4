//! Headless mode - NDJSON event output instead of the TUI
//!
//! Loads the collection once with the stored session and prints one JSON
//! object per line to stdout. Each object has an "event" field naming its
//! type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"applications_loaded","count":3,"timestamp":1704700001000}
//! {"event":"summary","total":3,"active":2,"inactive":1,"departments":3,"average_performance":"Bon","timestamp":1704700001000}
//! {"event":"export_written","path":"/home/me/Documents/resultats.doc","timestamp":1704700001002}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Collection fetched
    ApplicationsLoaded { count: usize, timestamp: i64 },

    /// Counters over the whole collection
    Summary {
        total: usize,
        active: usize,
        inactive: usize,
        departments: usize,
        average_performance: String,
        timestamp: i64,
    },

    /// Report written to disk
    ExportWritten { path: String, timestamp: i64 },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one JSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn applications_loaded(count: usize) -> Self {
        Self::ApplicationsLoaded {
            count,
            timestamp: Self::now(),
        }
    }

    pub fn summary(
        total: usize,
        active: usize,
        inactive: usize,
        departments: usize,
        average_performance: String,
    ) -> Self {
        Self::Summary {
            total,
            active,
            inactive,
            departments,
            average_performance,
            timestamp: Self::now(),
        }
    }

    pub fn export_written(path: &std::path::Path) -> Self {
        Self::ExportWritten {
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(event: &HeadlessEvent) -> serde_json::Value {
        let mut buf = Vec::new();
        event.write_to(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with('\n'));
        serde_json::from_str(line.trim_end()).unwrap()
    }

    #[test]
    fn test_event_tag_is_snake_case() {
        let json = to_json(&HeadlessEvent::applications_loaded(3));
        assert_eq!(json["event"], "applications_loaded");
        assert_eq!(json["count"], 3);
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_summary_fields() {
        let json = to_json(&HeadlessEvent::summary(3, 2, 1, 3, "Bon".into()));
        assert_eq!(json["event"], "summary");
        assert_eq!(json["active"], 2);
        assert_eq!(json["average_performance"], "Bon");
    }

    #[test]
    fn test_error_event() {
        let json = to_json(&HeadlessEvent::error("Not authenticated", true));
        assert_eq!(json["event"], "error");
        assert_eq!(json["fatal"], true);
    }
}
