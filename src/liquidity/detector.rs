//! Equal highs / equal lows detector

use serde::{Deserialize, Serialize};

use crate::candle::{Candle, Pair};
use crate::scoring::group_by_price;
use crate::signal::{
    ensure_ordered, DetectError, LevelType, Signal, SignalDetails, SignalDetector, SignalKind,
};
use crate::swing::{SwingDetector, SwingPoint, DEFAULT_SWING_WINDOW};

/// Shortest series the detector will scan
const MIN_CANDLES: usize = 20;
/// Strength awarded per touch of a level
const STRENGTH_PER_TOUCH: f64 = 25.0;

/// Configuration for liquidity detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidityConfig {
    /// Relative price distance within which swings count as one level
    pub equal_level_tolerance: f64,
    /// Half-window for swing point detection
    pub swing_window: usize,
}

impl Default for LiquidityConfig {
    fn default() -> Self {
        Self {
            equal_level_tolerance: 0.0002,
            swing_window: DEFAULT_SWING_WINDOW,
        }
    }
}

/// Detects equal highs (bearish) and equal lows (bullish)
#[derive(Debug, Clone, Default)]
pub struct LiquidityDetector {
    config: LiquidityConfig,
}

impl LiquidityDetector {
    /// Create a detector with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom configuration
    pub fn with_config(config: LiquidityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LiquidityConfig {
        &self.config
    }

    /// Find equal-high and equal-low levels, highs first
    ///
    /// The pair is unused: tolerance is relative to price, not pips.
    pub fn identify(&self, candles: &[Candle], _pair: &Pair) -> Vec<Signal> {
        if candles.len() < MIN_CANDLES {
            return Vec::new();
        }

        let swings = SwingDetector::new(self.config.swing_window).detect(candles);
        let (highs, lows): (Vec<SwingPoint>, Vec<SwingPoint>) =
            swings.into_iter().partition(|s| s.is_high());

        let tolerance = self.config.equal_level_tolerance;
        let mut signals: Vec<Signal> = cluster_equal_levels(&highs, tolerance)
            .into_iter()
            .filter_map(|group| level_signal(group, LevelType::EqualHighs))
            .collect();
        signals.extend(
            cluster_equal_levels(&lows, tolerance)
                .into_iter()
                .filter_map(|group| level_signal(group, LevelType::EqualLows)),
        );

        tracing::debug!(count = signals.len(), "Liquidity scan complete");
        signals
    }
}

impl SignalDetector for LiquidityDetector {
    fn category(&self) -> &'static str {
        "liquidity_zones"
    }

    fn detect(&self, candles: &[Candle], pair: &Pair) -> Result<Vec<Signal>, DetectError> {
        ensure_ordered(candles)?;
        Ok(self.identify(candles, pair))
    }
}

/// Group swing points sharing a price level, each group ordered by time
///
/// Groups come out in anchor order and always hold at least two points.
pub fn cluster_equal_levels(points: &[SwingPoint], tolerance: f64) -> Vec<Vec<SwingPoint>> {
    let mut groups = group_by_price(points, |p| p.price, tolerance);
    for group in &mut groups {
        group.sort_by_key(|p| p.timestamp);
    }
    groups
}

fn level_signal(group: Vec<SwingPoint>, level: LevelType) -> Option<Signal> {
    let (first, last) = (group.first()?, group.last()?);
    let touches = group.len();

    let (kind, label) = match level {
        LevelType::EqualHighs => (SignalKind::LiquidityEqualHighs, "Equal Highs"),
        LevelType::EqualLows => (SignalKind::LiquidityEqualLows, "Equal Lows"),
    };

    Some(Signal::new(
        kind,
        first.price,
        last.timestamp,
        touches as f64 * STRENGTH_PER_TOUCH,
        format!("{label} - {touches} touches at {:.5}", first.price),
        SignalDetails::Liquidity {
            level,
            touch_count: touches,
            touch_points: group,
        },
    ))
}
