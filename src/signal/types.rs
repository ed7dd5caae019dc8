//! Signal types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::swing::SwingPoint;

/// Timeframe label used when a detector runs outside an analysis pass
pub const DEFAULT_TIMEFRAME: &str = "current";

/// Market direction implied by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Bullish => write!(f, "bullish"),
            Direction::Bearish => write!(f, "bearish"),
        }
    }
}

/// Pattern that produced a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    #[serde(rename = "FVG_Bullish")]
    FvgBullish,
    #[serde(rename = "FVG_Bearish")]
    FvgBearish,
    #[serde(rename = "OB_Bullish")]
    ObBullish,
    #[serde(rename = "OB_Bearish")]
    ObBearish,
    #[serde(rename = "MSS_Bullish")]
    MssBullish,
    #[serde(rename = "MSS_Bearish")]
    MssBearish,
    #[serde(rename = "ChoCh_Bullish")]
    ChochBullish,
    #[serde(rename = "ChoCh_Bearish")]
    ChochBearish,
    #[serde(rename = "Liquidity_EqualHighs")]
    LiquidityEqualHighs,
    #[serde(rename = "Liquidity_EqualLows")]
    LiquidityEqualLows,
}

impl SignalKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::FvgBullish => "FVG_Bullish",
            SignalKind::FvgBearish => "FVG_Bearish",
            SignalKind::ObBullish => "OB_Bullish",
            SignalKind::ObBearish => "OB_Bearish",
            SignalKind::MssBullish => "MSS_Bullish",
            SignalKind::MssBearish => "MSS_Bearish",
            SignalKind::ChochBullish => "ChoCh_Bullish",
            SignalKind::ChochBearish => "ChoCh_Bearish",
            SignalKind::LiquidityEqualHighs => "Liquidity_EqualHighs",
            SignalKind::LiquidityEqualLows => "Liquidity_EqualLows",
        }
    }

    /// Direction every signal of this kind carries
    pub fn direction(&self) -> Direction {
        match self {
            SignalKind::FvgBullish
            | SignalKind::ObBullish
            | SignalKind::MssBullish
            | SignalKind::ChochBullish
            | SignalKind::LiquidityEqualLows => Direction::Bullish,
            SignalKind::FvgBearish
            | SignalKind::ObBearish
            | SignalKind::MssBearish
            | SignalKind::ChochBearish
            | SignalKind::LiquidityEqualHighs => Direction::Bearish,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OHLC snapshot of the middle candle of a fair value gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpulseCandle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Side of the market an order block represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Demand,
    Supply,
}

/// Swing sequence broken by a structure shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    HigherHigh,
    LowerLow,
}

/// Kind of resting liquidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelType {
    EqualHighs,
    EqualLows,
}

/// Auxiliary data attached to a signal, one variant per pattern family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SignalDetails {
    FairValueGap {
        gap_high: f64,
        gap_low: f64,
        gap_size_pips: f64,
        impulse: ImpulseCandle,
    },
    OrderBlock {
        ob_high: f64,
        ob_low: f64,
        ob_open: f64,
        ob_close: f64,
        /// Price distance travelled by the confirmation candles
        confirmation_move: f64,
        zone: ZoneType,
    },
    StructureShift {
        previous_level: f64,
        new_level: f64,
        break_size_pips: f64,
        structure: StructureType,
    },
    ChangeOfCharacter {
        /// The lower low (bullish) or higher high (bearish)
        extreme: f64,
        broken_level: f64,
        break_size_pips: f64,
    },
    Liquidity {
        level: LevelType,
        touch_count: usize,
        touch_points: Vec<SwingPoint>,
    },
}

/// A scored smart money signal
///
/// Signals are value objects: detectors create them once and nothing
/// downstream mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub direction: Direction,
    /// Representative price level
    pub price: f64,
    /// Time of the candle the signal is anchored to
    pub timestamp: DateTime<Utc>,
    /// Confidence score in [0, 100]
    pub strength: f64,
    /// Display-only timeframe label
    pub timeframe: String,
    pub description: String,
    pub details: SignalDetails,
}

impl Signal {
    /// Create a new signal; direction follows the kind and strength is clamped
    pub fn new(
        kind: SignalKind,
        price: f64,
        timestamp: DateTime<Utc>,
        strength: f64,
        description: impl Into<String>,
        details: SignalDetails,
    ) -> Self {
        Self {
            kind,
            direction: kind.direction(),
            price,
            timestamp,
            strength: clamp_strength(strength),
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            description: description.into(),
            details,
        }
    }

    /// Relabel the signal with the analysis timeframe
    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }

    pub fn is_bullish(&self) -> bool {
        self.direction == Direction::Bullish
    }

    pub fn is_bearish(&self) -> bool {
        self.direction == Direction::Bearish
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) @ {:.5} | strength {:.1}% | {} | {}",
            self.kind.as_str().replace('_', " "),
            self.direction,
            self.price,
            self.strength,
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.description
        )
    }
}

/// Clamp a composite score into [0, 100]
pub(crate) fn clamp_strength(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
