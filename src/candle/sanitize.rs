//! Series sanitizing
//!
//! Cleans a raw provider series before analysis: invalid rows are dropped,
//! the remainder is sorted and duplicate timestamps are collapsed.

use super::Candle;

/// What [`sanitize`] removed from a series
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Rows with non-finite prices or volume
    pub non_finite: usize,
    /// Rows whose high/low do not bound open/close
    pub inconsistent: usize,
    /// Rows sharing a timestamp with an earlier row
    pub duplicates: usize,
}

impl SanitizeReport {
    /// Total number of rows dropped
    pub fn dropped(&self) -> usize {
        self.non_finite + self.inconsistent + self.duplicates
    }
}

/// Clean a candle series so it satisfies the detectors' preconditions
pub fn sanitize(candles: Vec<Candle>) -> (Vec<Candle>, SanitizeReport) {
    let mut report = SanitizeReport::default();

    let mut kept: Vec<Candle> = candles
        .into_iter()
        .filter(|candle| {
            if !candle.is_finite() {
                report.non_finite += 1;
                false
            } else if !candle.is_consistent() {
                report.inconsistent += 1;
                false
            } else {
                true
            }
        })
        .collect();

    // Stable, so the first of several rows sharing a timestamp survives
    kept.sort_by_key(|c| c.timestamp);
    let before = kept.len();
    kept.dedup_by_key(|c| c.timestamp);
    report.duplicates = before - kept.len();

    if report.dropped() > 0 {
        tracing::warn!(
            non_finite = report.non_finite,
            inconsistent = report.inconsistent,
            duplicates = report.duplicates,
            "Removed invalid candles from series"
        );
    }

    (kept, report)
}
