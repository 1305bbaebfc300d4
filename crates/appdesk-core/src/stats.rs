//! Aggregate performance of a set of applications

use crate::application::{Application, Performance};

/// Shown when there is nothing to average
pub const NO_PERFORMANCE_PLACEHOLDER: &str = "---";

/// Score used for records whose label is missing or unknown (Moyen)
const FALLBACK_SCORE: f64 = 2.0;

/// Mean performance score, `None` for an empty list
pub fn mean_score(apps: &[&Application]) -> Option<f64> {
    if apps.is_empty() {
        return None;
    }
    let sum: f64 = apps
        .iter()
        .map(|app| {
            app.performance_level()
                .map(|p| f64::from(p.score()))
                .unwrap_or(FALLBACK_SCORE)
        })
        .sum();
    Some(sum / apps.len() as f64)
}

/// Bucket a mean score back onto the scale
pub fn bucket(mean: f64) -> Performance {
    if mean >= 3.5 {
        Performance::Excellent
    } else if mean >= 2.5 {
        Performance::Bon
    } else if mean >= 1.5 {
        Performance::Moyen
    } else {
        Performance::Faible
    }
}

/// Average performance label, or [`NO_PERFORMANCE_PLACEHOLDER`] when empty
pub fn average_performance(apps: &[&Application]) -> String {
    match mean_score(apps) {
        Some(mean) => bucket(mean).label().to_string(),
        None => NO_PERFORMANCE_PLACEHOLDER.to_string(),
    }
}
