//! Directional market bias

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::signal::{Direction, Signal};

/// Share of weighted strength a direction needs to dominate
const DOMINANCE_PCT: f64 = 60.0;
/// Signals above this strength count as strong in the reasoning
const STRONG_SIGNAL: f64 = 70.0;
/// Confidence reported when neither side dominates
const NEUTRAL_CONFIDENCE: f64 = 50.0;

/// Overall market direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Bullish => write!(f, "BULLISH"),
            Bias::Bearish => write!(f, "BEARISH"),
            Bias::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Bias derived from a signal list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketBias {
    pub bias: Bias,
    /// Percentage, rounded to one decimal place
    pub confidence: f64,
    pub reasoning: String,
}

impl MarketBias {
    fn neutral(reasoning: &str) -> Self {
        Self {
            bias: Bias::Neutral,
            confidence: 0.0,
            reasoning: reasoning.to_string(),
        }
    }
}

/// Weigh each signal by `strength / 100` and compare the two directions
pub fn market_bias(signals: &[Signal]) -> MarketBias {
    if signals.is_empty() {
        return MarketBias::neutral("No signals available");
    }

    let (bullish, bearish) = signals.iter().fold((0.0, 0.0), |(bull, bear), s| {
        let weight = s.strength / 100.0;
        match s.direction {
            Direction::Bullish => (bull + weight, bear),
            Direction::Bearish => (bull, bear + weight),
        }
    });

    let total = bullish + bearish;
    if total == 0.0 {
        return MarketBias::neutral("Signals balanced");
    }

    let bullish_pct = bullish / total * 100.0;
    let bearish_pct = bearish / total * 100.0;

    let (bias, confidence) = if bullish_pct > DOMINANCE_PCT {
        (Bias::Bullish, bullish_pct)
    } else if bearish_pct > DOMINANCE_PCT {
        (Bias::Bearish, bearish_pct)
    } else {
        (Bias::Neutral, NEUTRAL_CONFIDENCE)
    };

    let strong = signals.iter().filter(|s| s.strength > STRONG_SIGNAL).count();

    MarketBias {
        bias,
        confidence: (confidence * 10.0).round() / 10.0,
        reasoning: format!(
            "{strong} strong signals of {} total. Bullish: {bullish_pct:.1}%, Bearish: {bearish_pct:.1}%",
            signals.len()
        ),
    }
}
