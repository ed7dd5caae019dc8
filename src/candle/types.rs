//! Candle types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signal::ScanError;

/// A single OHLC candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Candle open time
    #[serde(alias = "datetime")]
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Traded volume, when the provider reports one
    #[serde(default)]
    pub volume: Option<f64>,
}

impl Candle {
    /// Create a candle without volume
    pub fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Attach a volume reading
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Absolute size of the candle body
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full high-low range
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Check the fields a detector reads from this candle
    ///
    /// Non-finite prices, a non-finite volume and an inverted range are
    /// reported as a malformed row at `index`.
    pub fn check(&self, index: usize) -> Result<(), ScanError> {
        if !self.prices_finite() {
            return Err(ScanError::MalformedCandle {
                index,
                reason: "non-finite price",
            });
        }
        if self.volume.is_some_and(|v| !v.is_finite()) {
            return Err(ScanError::MalformedCandle {
                index,
                reason: "non-finite volume",
            });
        }
        if self.high < self.low {
            return Err(ScanError::MalformedCandle {
                index,
                reason: "high below low",
            });
        }
        Ok(())
    }

    fn prices_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite())
    }

    /// Whether every price and the volume (if any) is finite
    pub fn is_finite(&self) -> bool {
        self.prices_finite() && self.volume.map_or(true, f64::is_finite)
    }

    /// Whether the OHLC fields are mutually consistent
    pub fn is_consistent(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_body_and_range() {
        let candle = Candle::new(ts(), 1.1000, 1.1050, 1.0990, 1.1040);
        assert!((candle.body() - 0.0040).abs() < 1e-12);
        assert!((candle.range() - 0.0060).abs() < 1e-12);
        assert!(candle.is_bullish());
        assert!(!candle.is_bearish());
    }

    #[test]
    fn test_check_accepts_valid_candle() {
        let candle = Candle::new(ts(), 1.1, 1.2, 1.0, 1.15).with_volume(1200.0);
        assert!(candle.check(0).is_ok());
        assert!(candle.is_consistent());
    }

    #[test]
    fn test_check_rejects_nan_price() {
        let candle = Candle::new(ts(), 1.1, f64::NAN, 1.0, 1.15);
        let err = candle.check(7).unwrap_err();
        assert!(matches!(
            err,
            ScanError::MalformedCandle { index: 7, .. }
        ));
    }

    #[test]
    fn test_check_rejects_inverted_range() {
        let candle = Candle::new(ts(), 1.1, 1.0, 1.2, 1.15);
        assert!(candle.check(3).is_err());
        assert!(!candle.is_consistent());
    }

    #[test]
    fn test_check_rejects_infinite_volume() {
        let candle = Candle::new(ts(), 1.1, 1.2, 1.0, 1.15).with_volume(f64::INFINITY);
        assert!(candle.check(0).is_err());
    }

    #[test]
    fn test_deserialize_without_volume() {
        let json = r#"{"datetime":"2024-03-01T12:00:00Z","open":1.1,"high":1.2,"low":1.0,"close":1.15}"#;
        let candle: Candle = serde_json::from_str(json).unwrap();
        assert_eq!(candle.timestamp, ts());
        assert!(candle.volume.is_none());
    }
}
