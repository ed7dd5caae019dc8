//! Swing point detector

use crate::candle::Candle;
use crate::signal::{check_window, scan_indices};

use super::types::{SwingKind, SwingPoint};

/// Candles on each side of a pivot
pub const DEFAULT_SWING_WINDOW: usize = 5;

/// Finds pivot highs and lows with a symmetric window
///
/// Candle `i` is a swing high when its high is the maximum high of
/// `[i - window, i + window]`, otherwise a swing low when its low is the
/// minimum low of that window. A candle that is both is reported as a high.
#[derive(Debug, Clone, Copy)]
pub struct SwingDetector {
    window: usize,
}

impl Default for SwingDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWING_WINDOW)
    }
}

impl SwingDetector {
    /// Create a detector with the given half-window
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Scan the series for swing points, ordered by index
    pub fn detect(&self, candles: &[Candle]) -> Vec<SwingPoint> {
        let w = self.window;
        let n = candles.len();
        if n < 2 * w + 1 {
            return Vec::new();
        }

        scan_indices("swing", w..n - w, |i| {
            let span = i - w..i + w + 1;
            check_window(candles, span.clone())?;

            let window = &candles[span];
            let max_high = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
            let min_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);

            let candle = &candles[i];
            let kind = if candle.high == max_high {
                Some(SwingKind::High)
            } else if candle.low == min_low {
                Some(SwingKind::Low)
            } else {
                None
            };

            Ok(kind.map(|kind| SwingPoint {
                kind,
                price: match kind {
                    SwingKind::High => candle.high,
                    SwingKind::Low => candle.low,
                },
                timestamp: candle.timestamp,
                index: i,
            }))
        })
    }
}
