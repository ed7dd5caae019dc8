//! Swing point types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a swing point is a pivot high or a pivot low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingKind {
    High,
    Low,
}

/// A confirmed local extremum of the candle series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    pub kind: SwingKind,
    /// The candle's high for a swing high, its low for a swing low
    pub price: f64,
    pub timestamp: DateTime<Utc>,
    /// Position of the candle in the source series
    pub index: usize,
}

impl SwingPoint {
    pub fn is_high(&self) -> bool {
        self.kind == SwingKind::High
    }

    pub fn is_low(&self) -> bool {
        self.kind == SwingKind::Low
    }
}
