//! Shared sub-score helpers
//!
//! Building blocks the detectors combine into composite strengths, plus the
//! greedy price grouping shared by liquidity and confluence analysis.

mod cluster;
mod trend;

pub use cluster::group_by_price;
pub use trend::trend_strength;

use crate::candle::Candle;

/// Relative volume sub-score cap
pub const VOLUME_SCORE_CAP: f64 = 25.0;
/// Relative volume sub-score when no usable volume is available
pub const VOLUME_FALLBACK: f64 = 15.0;
/// Context must hold more candles than this for a volume comparison
const MIN_VOLUME_CONTEXT: usize = 5;

/// Body-to-range ratio of a candle, `None` for a flat candle
pub fn body_ratio(candle: &Candle) -> Option<f64> {
    let range = candle.range();
    (range > 0.0).then(|| candle.body() / range)
}

/// Score a candle's volume against the mean volume of its context
///
/// `min(25, volume / mean * 10)`. Falls back to a flat 15 when the candle
/// has no volume, the context is too short, or the mean volume is zero.
pub fn relative_volume_score(volume: Option<f64>, context: &[Candle]) -> f64 {
    let Some(volume) = volume else {
        return VOLUME_FALLBACK;
    };
    if context.len() <= MIN_VOLUME_CONTEXT {
        return VOLUME_FALLBACK;
    }

    let readings: Vec<f64> = context
        .iter()
        .filter_map(|c| c.volume)
        .filter(|v| v.is_finite())
        .collect();
    if readings.is_empty() {
        return VOLUME_FALLBACK;
    }
    let mean = readings.iter().sum::<f64>() / readings.len() as f64;
    if mean <= 0.0 {
        return VOLUME_FALLBACK;
    }

    (volume / mean * 10.0).min(VOLUME_SCORE_CAP)
}
