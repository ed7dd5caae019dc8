//! Detection errors

use thiserror::Error;

/// Soft failure while processing a single index of a scan
///
/// The scan driver logs it and moves on to the next index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A candle read by this step has unusable fields
    #[error("Malformed candle at index {index}: {reason}")]
    MalformedCandle { index: usize, reason: &'static str },
}

/// Failure that invalidates a whole detector pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// Candle timestamps go backwards
    #[error("Candle series is not ascending at index {index}")]
    UnorderedSeries { index: usize },
    /// Two candles share a timestamp
    #[error("Duplicate candle timestamp at index {index}")]
    DuplicateTimestamp { index: usize },
}
