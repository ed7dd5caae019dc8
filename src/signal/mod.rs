//! Signal module
//!
//! Signal value types, error types, the per-index scan driver and the
//! detector trait shared by every pattern detector

mod error;
mod scan;
mod types;

pub use error::{DetectError, ScanError};
pub use scan::ensure_ordered;
pub(crate) use scan::{check_window, scan_indices};
pub use types::{
    Direction, ImpulseCandle, LevelType, Signal, SignalDetails, SignalKind, StructureType,
    ZoneType, DEFAULT_TIMEFRAME,
};
pub(crate) use types::clamp_strength;

use crate::candle::{Candle, Pair};

/// Trait for pattern detectors run by the analyzer
pub trait SignalDetector: Send + Sync {
    /// Category name used in logs and metrics
    fn category(&self) -> &'static str;

    /// Scan a candle series and return every signal found
    ///
    /// Malformed rows are skipped; an error means the series as a whole
    /// could not be processed.
    fn detect(&self, candles: &[Candle], pair: &Pair) -> Result<Vec<Signal>, DetectError>;
}
