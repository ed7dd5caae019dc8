//! Fair value gap detector

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::candle::{Candle, Pair};
use crate::scoring::{body_ratio, relative_volume_score, trend_strength};
use crate::signal::{
    check_window, clamp_strength, ensure_ordered, scan_indices, DetectError, Direction,
    ImpulseCandle, ScanError, Signal, SignalDetails, SignalDetector, SignalKind,
};

/// Body must exceed this share of the range for a valid impulse
const IMPULSE_BODY_RATIO: f64 = 0.6;
/// Candles before the newest gap candle used for scoring context
const CONTEXT_LOOKBACK: usize = 10;
/// Closes needed for the trend factor
const TREND_CLOSES: usize = 10;
/// Trend sub-score when context is too short
const TREND_FALLBACK: f64 = 12.5;

/// Configuration for fair value gap detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FairValueGapConfig {
    /// Minimum gap size in pips
    pub min_gap_pips: f64,
    /// Gaps older than this (relative to the last candle) are dropped
    pub max_age_hours: u32,
}

impl Default for FairValueGapConfig {
    fn default() -> Self {
        Self {
            min_gap_pips: 3.0,
            max_age_hours: 24,
        }
    }
}

/// Detects fair value gaps
///
/// For each triple of candles (c1, c2, c3) a bullish gap exists when
/// `c1.low > c3.high` and a bearish gap when `c1.high < c3.low`. The gap is
/// kept only if it is large enough and c2 is a strong candle in the gap's
/// direction.
#[derive(Debug, Clone, Default)]
pub struct FairValueGapDetector {
    config: FairValueGapConfig,
}

impl FairValueGapDetector {
    /// Create a detector with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom configuration
    pub fn with_config(config: FairValueGapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FairValueGapConfig {
        &self.config
    }

    /// Find all unexpired fair value gaps in the series
    pub fn identify(&self, candles: &[Candle], pair: &Pair) -> Vec<Signal> {
        if candles.len() < 3 {
            return Vec::new();
        }

        let signals = scan_indices("fair_value_gap", 2..candles.len(), |i| {
            self.evaluate(candles, i, pair)
        });

        let Some(last) = candles.last() else {
            return signals;
        };
        let max_age = Duration::hours(i64::from(self.config.max_age_hours));
        let found = signals.len();
        let active: Vec<Signal> = signals
            .into_iter()
            .filter(|s| last.timestamp - s.timestamp <= max_age)
            .collect();

        tracing::debug!(
            found,
            active = active.len(),
            "Fair value gap scan complete"
        );
        active
    }

    /// Evaluate the triple ending at index `i`
    fn evaluate(&self, candles: &[Candle], i: usize, pair: &Pair) -> Result<Option<Signal>, ScanError> {
        check_window(candles, i - 2..i + 1)?;
        let (c1, c2, c3) = (&candles[i - 2], &candles[i - 1], &candles[i]);

        // (direction, upper edge, lower edge)
        let candidate = if c1.low > c3.high {
            Some((Direction::Bullish, c1.low, c3.high))
        } else if c1.high < c3.low {
            Some((Direction::Bearish, c3.low, c1.high))
        } else {
            None
        };
        let Some((direction, gap_high, gap_low)) = candidate else {
            return Ok(None);
        };

        let gap_pips = pair.to_pips(gap_high - gap_low);
        if gap_pips < self.config.min_gap_pips || !is_impulse(c2, direction) {
            return Ok(None);
        }

        let context = &candles[i.saturating_sub(CONTEXT_LOOKBACK)..=i];
        let strength = gap_strength(gap_pips, c2, context);

        let (kind, label) = match direction {
            Direction::Bullish => (SignalKind::FvgBullish, "FVG Bullish"),
            Direction::Bearish => (SignalKind::FvgBearish, "FVG Bearish"),
        };

        Ok(Some(Signal::new(
            kind,
            (gap_high + gap_low) / 2.0,
            c3.timestamp,
            strength,
            format!("{label} - Gap: {gap_pips:.1} pips"),
            SignalDetails::FairValueGap {
                gap_high,
                gap_low,
                gap_size_pips: gap_pips,
                impulse: ImpulseCandle {
                    open: c2.open,
                    high: c2.high,
                    low: c2.low,
                    close: c2.close,
                },
            },
        )))
    }
}

impl SignalDetector for FairValueGapDetector {
    fn category(&self) -> &'static str {
        "fair_value_gaps"
    }

    fn detect(&self, candles: &[Candle], pair: &Pair) -> Result<Vec<Signal>, DetectError> {
        ensure_ordered(candles)?;
        Ok(self.identify(candles, pair))
    }
}

/// Whether the candle is a strong-bodied candle pointing in `direction`
fn is_impulse(candle: &Candle, direction: Direction) -> bool {
    let range = candle.range();
    let has_body = range > 0.0 && candle.body() > range * IMPULSE_BODY_RATIO;
    let colored = match direction {
        Direction::Bullish => candle.is_bullish(),
        Direction::Bearish => candle.is_bearish(),
    };
    has_body && colored
}

/// Composite strength: gap size, impulse quality, relative volume, trend
fn gap_strength(gap_pips: f64, impulse: &Candle, context: &[Candle]) -> f64 {
    let magnitude = (gap_pips * 2.0).min(25.0);
    let quality = body_ratio(impulse).map_or(0.0, |r| r * 25.0);
    let volume = relative_volume_score(impulse.volume, context);

    let closes: Vec<f64> = context
        .iter()
        .map(|c| c.close)
        .filter(|c| c.is_finite())
        .collect();
    let trend = if closes.len() >= TREND_CLOSES {
        trend_strength(&closes[closes.len() - TREND_CLOSES..]) * 25.0
    } else {
        TREND_FALLBACK
    };

    clamp_strength(magnitude + quality + volume + trend)
}
