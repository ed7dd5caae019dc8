//! Signal list filters

use chrono::{DateTime, Duration, Utc};

use crate::signal::Signal;

/// Keep signals with `strength >= min_strength`, preserving order
pub fn filter_by_strength(signals: &[Signal], min_strength: f64) -> Vec<Signal> {
    signals
        .iter()
        .filter(|s| s.strength >= min_strength)
        .cloned()
        .collect()
}

/// Keep signals no older than `max_age` relative to `reference`, preserving order
pub fn filter_by_age(signals: &[Signal], reference: DateTime<Utc>, max_age: Duration) -> Vec<Signal> {
    signals
        .iter()
        .filter(|s| reference - s.timestamp <= max_age)
        .cloned()
        .collect()
}
