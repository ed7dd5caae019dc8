//! Market structure detector

use serde::{Deserialize, Serialize};

use crate::candle::{Candle, Pair};
use crate::signal::{
    clamp_strength, ensure_ordered, scan_indices, DetectError, Direction, Signal, SignalDetails,
    SignalDetector, SignalKind, StructureType,
};
use crate::swing::{SwingDetector, SwingPoint, DEFAULT_SWING_WINDOW};

/// Swing points needed before any structure is evaluated
const MIN_SWINGS: usize = 4;
/// Swings (including the current one) scored for a structure shift
const SHIFT_CONTEXT: usize = 4;
/// Swings (including the current one) inspected for a change of character
const CHOCH_WINDOW: usize = 5;
/// Changes of character are rare and carry a fixed strength
const CHOCH_STRENGTH: f64 = 70.0;

/// Configuration for market structure detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// The series must hold at least twice this many candles
    pub lookback_period: usize,
    /// Minimum break beyond the reference swing, in pips
    pub min_break_pips: f64,
    /// Half-window for swing point detection
    pub swing_window: usize,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            lookback_period: 20,
            min_break_pips: 2.0,
            swing_window: DEFAULT_SWING_WINDOW,
        }
    }
}

/// Detects market structure shifts and changes of character
#[derive(Debug, Clone, Default)]
pub struct StructureDetector {
    config: StructureConfig,
}

impl StructureDetector {
    /// Create a detector with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom configuration
    pub fn with_config(config: StructureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StructureConfig {
        &self.config
    }

    /// Find structure shifts and changes of character in the series
    pub fn identify(&self, candles: &[Candle], pair: &Pair) -> Vec<Signal> {
        if candles.len() < self.config.lookback_period * 2 {
            return Vec::new();
        }

        let swings = SwingDetector::new(self.config.swing_window).detect(candles);
        if swings.len() < MIN_SWINGS {
            return Vec::new();
        }

        let signals = scan_indices("market_structure", 2..swings.len(), |i| {
            let mut found = Vec::new();
            if let Some(shift) = self.structure_shift(&swings, i, pair) {
                found.push(shift);
            }
            let window = &swings[(i + 1).saturating_sub(CHOCH_WINDOW)..=i];
            if let Some(choch) = self.change_of_character(window, pair) {
                found.push(choch);
            }
            Ok(found)
        });

        tracing::debug!(
            swings = swings.len(),
            count = signals.len(),
            "Market structure scan complete"
        );
        signals
    }

    /// Compare swing `i` with the swing two steps back
    fn structure_shift(&self, swings: &[SwingPoint], i: usize, pair: &Pair) -> Option<Signal> {
        let current = &swings[i];
        let reference = &swings[i - 2];

        let (direction, break_pips) = if current.is_high()
            && reference.is_high()
            && current.price > reference.price
        {
            (Direction::Bullish, pair.to_pips(current.price - reference.price))
        } else if current.is_low() && reference.is_low() && current.price < reference.price {
            (Direction::Bearish, pair.to_pips(reference.price - current.price))
        } else {
            return None;
        };

        if break_pips < self.config.min_break_pips {
            return None;
        }

        let context = &swings[(i + 1).saturating_sub(SHIFT_CONTEXT)..=i];
        let strength = shift_strength(context, direction);

        let (kind, structure, label) = match direction {
            Direction::Bullish => (SignalKind::MssBullish, StructureType::HigherHigh, "Bullish"),
            Direction::Bearish => (SignalKind::MssBearish, StructureType::LowerLow, "Bearish"),
        };

        Some(Signal::new(
            kind,
            current.price,
            current.timestamp,
            strength,
            format!("Market Structure Shift {label} - Break: {break_pips:.1} pips"),
            SignalDetails::StructureShift {
                previous_level: reference.price,
                new_level: current.price,
                break_size_pips: break_pips,
                structure,
            },
        ))
    }

    /// Look for a change of character in a short window of swings
    ///
    /// Bullish: the latest low undercuts the previous low after the latest
    /// high. Bearish: the latest high clears the previous high after the
    /// latest low. Bullish is checked first.
    fn change_of_character(&self, window: &[SwingPoint], pair: &Pair) -> Option<Signal> {
        if window.len() < MIN_SWINGS {
            return None;
        }

        let lows: Vec<&SwingPoint> = window.iter().filter(|s| s.is_low()).collect();
        let highs: Vec<&SwingPoint> = window.iter().filter(|s| s.is_high()).collect();

        if let ([.., prev_low, last_low], Some(last_high)) = (lows.as_slice(), highs.last()) {
            if last_low.price < prev_low.price && last_low.index > last_high.index {
                let break_pips = pair.to_pips(last_high.price - prev_low.price);
                if break_pips >= self.config.min_break_pips {
                    return Some(Signal::new(
                        SignalKind::ChochBullish,
                        last_high.price,
                        last_low.timestamp,
                        CHOCH_STRENGTH,
                        format!("Change of Character Bullish - {break_pips:.1} pips"),
                        SignalDetails::ChangeOfCharacter {
                            extreme: last_low.price,
                            broken_level: last_high.price,
                            break_size_pips: break_pips,
                        },
                    ));
                }
            }
        }

        if let ([.., prev_high, last_high], Some(last_low)) = (highs.as_slice(), lows.last()) {
            if last_high.price > prev_high.price && last_high.index > last_low.index {
                let break_pips = pair.to_pips(prev_high.price - last_low.price);
                if break_pips >= self.config.min_break_pips {
                    return Some(Signal::new(
                        SignalKind::ChochBearish,
                        last_low.price,
                        last_high.timestamp,
                        CHOCH_STRENGTH,
                        format!("Change of Character Bearish - {break_pips:.1} pips"),
                        SignalDetails::ChangeOfCharacter {
                            extreme: last_high.price,
                            broken_level: last_low.price,
                            break_size_pips: break_pips,
                        },
                    ));
                }
            }
        }

        None
    }
}

impl SignalDetector for StructureDetector {
    fn category(&self) -> &'static str {
        "market_structure"
    }

    fn detect(&self, candles: &[Candle], pair: &Pair) -> Result<Vec<Signal>, DetectError> {
        ensure_ordered(candles)?;
        Ok(self.identify(candles, pair))
    }
}

/// Composite strength of a structure shift
///
/// - trend consistency (40): the opposing swings (lows for bullish, highs
///   for bearish) never decrease across the context, 20 otherwise
/// - break magnitude (30): percentage move between the last two swings
/// - temporal context (30): flat award once three swings are in context
fn shift_strength(context: &[SwingPoint], direction: Direction) -> f64 {
    let [.., previous, latest] = context else {
        return 50.0;
    };

    let levels: Vec<f64> = context
        .iter()
        .filter(|s| match direction {
            Direction::Bullish => s.is_low(),
            Direction::Bearish => s.is_high(),
        })
        .map(|s| s.price)
        .collect();
    let consistency = match levels.len() {
        0 | 1 => 0.0,
        _ if levels.windows(2).all(|w| w[0] <= w[1]) => 40.0,
        _ => 20.0,
    };

    let average = (latest.price + previous.price) / 2.0;
    let magnitude = if average > 0.0 {
        let percentage = (latest.price - previous.price).abs() / average * 100.0;
        (percentage * 1000.0).min(30.0)
    } else {
        0.0
    };

    let temporal = if context.len() >= 3 { 30.0 } else { 0.0 };

    clamp_strength(consistency + magnitude + temporal)
}
