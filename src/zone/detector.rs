//! Order block detector

use serde::{Deserialize, Serialize};

use crate::candle::{Candle, Pair};
use crate::scoring::{body_ratio, relative_volume_score};
use crate::signal::{
    check_window, clamp_strength, ensure_ordered, scan_indices, DetectError, Direction,
    ScanError, Signal, SignalDetails, SignalDetector, SignalKind, ZoneType,
};

/// Shortest series the detector will scan
const MIN_CANDLES: usize = 10;
/// Candles on each side of the order block used for volume context
const CONTEXT_SPAN: usize = 10;
/// Body quality sub-score for a flat candle
const QUALITY_FALLBACK: f64 = 10.0;

/// Configuration for order block detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBlockConfig {
    /// Minimum move beyond the order block candle, in pips
    pub min_size_pips: f64,
    /// Candles after the order block that must confirm the move
    pub confirmation_candles: usize,
    /// Candles skipped at the start of the series
    pub window: usize,
}

impl Default for OrderBlockConfig {
    fn default() -> Self {
        Self {
            min_size_pips: 5.0,
            confirmation_candles: 2,
            window: 5,
        }
    }
}

/// Detects order blocks
///
/// A bearish candle followed by confirmation candles whose highest high
/// clears its high by `min_size_pips` is a bullish (demand) order block.
/// A bullish candle followed by a drop below its low is a bearish (supply)
/// order block.
#[derive(Debug, Clone, Default)]
pub struct OrderBlockDetector {
    config: OrderBlockConfig,
}

impl OrderBlockDetector {
    /// Create a detector with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom configuration
    pub fn with_config(config: OrderBlockConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrderBlockConfig {
        &self.config
    }

    /// Find all order blocks in the series
    pub fn identify(&self, candles: &[Candle], pair: &Pair) -> Vec<Signal> {
        let n = candles.len();
        let confirmation = self.config.confirmation_candles;
        if n < MIN_CANDLES || confirmation == 0 || n <= confirmation {
            return Vec::new();
        }

        let signals = scan_indices("order_block", self.config.window..n - confirmation, |i| {
            self.evaluate(candles, i, pair)
        });

        tracing::debug!(count = signals.len(), "Order block scan complete");
        signals
    }

    /// Evaluate candle `i` against the candles that follow it
    fn evaluate(&self, candles: &[Candle], i: usize, pair: &Pair) -> Result<Option<Signal>, ScanError> {
        let confirmation = self.config.confirmation_candles;
        check_window(candles, i..i + confirmation + 1)?;

        let candle = &candles[i];
        let future = &candles[i + 1..=i + confirmation];

        let highest_after = future.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
        let lowest_after = future.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);

        let direction = if candle.is_bearish()
            && pair.to_pips(highest_after - candle.high) >= self.config.min_size_pips
        {
            Direction::Bullish
        } else if candle.is_bullish()
            && pair.to_pips(candle.low - lowest_after) >= self.config.min_size_pips
        {
            Direction::Bearish
        } else {
            return Ok(None);
        };

        // future[0] exists: confirmation >= 1
        let move_size = match direction {
            Direction::Bullish => highest_after - future[0].close,
            Direction::Bearish => future[0].close - lowest_after,
        };

        let context_end = (i + CONTEXT_SPAN).min(candles.len());
        let context = &candles[i.saturating_sub(CONTEXT_SPAN)..context_end];
        let strength = block_strength(candle, move_size, future.len(), context);

        let (kind, price, zone, label) = match direction {
            Direction::Bullish => (SignalKind::ObBullish, candle.low, ZoneType::Demand, "Order Block Bullish"),
            Direction::Bearish => (SignalKind::ObBearish, candle.high, ZoneType::Supply, "Order Block Bearish"),
        };

        Ok(Some(Signal::new(
            kind,
            price,
            candle.timestamp,
            strength,
            format!("{label} - Zone: {price:.5}"),
            SignalDetails::OrderBlock {
                ob_high: candle.high,
                ob_low: candle.low,
                ob_open: candle.open,
                ob_close: candle.close,
                confirmation_move: move_size,
                zone,
            },
        )))
    }
}

impl SignalDetector for OrderBlockDetector {
    fn category(&self) -> &'static str {
        "order_blocks"
    }

    fn detect(&self, candles: &[Candle], pair: &Pair) -> Result<Vec<Signal>, DetectError> {
        ensure_ordered(candles)?;
        Ok(self.identify(candles, pair))
    }
}

/// Composite strength: move size, move speed, relative volume, body quality
///
/// Move scaling assumes four-decimal quoting.
fn block_strength(candle: &Candle, move_size: f64, confirmations: usize, context: &[Candle]) -> f64 {
    let size = if move_size > 0.0 {
        (move_size * 10_000.0).min(30.0)
    } else {
        0.0
    };
    let speed = (move_size / confirmations as f64 * 50_000.0).clamp(0.0, 25.0);
    let volume = relative_volume_score(candle.volume, context);
    let quality = body_ratio(candle).map_or(QUALITY_FALLBACK, |r| r * 20.0);

    clamp_strength(size + speed + volume + quality)
}
