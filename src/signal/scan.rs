//! Per-index scan driver
//!
//! Every detector walks an index range and runs one step per index. A step
//! either produces items, produces nothing, or reports a soft failure; the
//! driver decides to keep going in all three cases.

use std::cmp::Ordering;
use std::ops::Range;

use super::{DetectError, ScanError};
use crate::candle::Candle;
use crate::telemetry;

/// Run `step` for every index in `range`, collecting what it yields
///
/// Soft failures are logged with the offending index and counted; they never
/// stop the scan.
pub(crate) fn scan_indices<T, I, F>(detector: &'static str, range: Range<usize>, mut step: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(usize) -> Result<I, ScanError>,
{
    let mut out = Vec::new();
    let mut skipped = 0u64;

    for index in range {
        match step(index) {
            Ok(items) => out.extend(items),
            Err(e) => {
                skipped += 1;
                tracing::warn!(detector, index, error = %e, "Skipping row");
            }
        }
    }

    if skipped > 0 {
        telemetry::record_rows_skipped(detector, skipped);
    }

    out
}

/// Check every candle in `candles[range]`, reporting the first malformed one
pub(crate) fn check_window(candles: &[Candle], range: Range<usize>) -> Result<(), ScanError> {
    let start = range.start;
    candles[range]
        .iter()
        .enumerate()
        .try_for_each(|(offset, candle)| candle.check(start + offset))
}

/// Verify the series is strictly ascending by timestamp
pub fn ensure_ordered(candles: &[Candle]) -> Result<(), DetectError> {
    for (i, pair) in candles.windows(2).enumerate() {
        match pair[0].timestamp.cmp(&pair[1].timestamp) {
            Ordering::Less => {}
            Ordering::Equal => return Err(DetectError::DuplicateTimestamp { index: i + 1 }),
            Ordering::Greater => return Err(DetectError::UnorderedSeries { index: i + 1 }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn candle(minute: i64) -> Candle {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::minutes(minute);
        Candle::new(ts, 1.0, 1.1, 0.9, 1.05)
    }

    #[test]
    fn test_scan_continues_after_soft_failure() {
        let produced = scan_indices("test", 0..5, |i| {
            if i == 2 {
                Err(ScanError::MalformedCandle {
                    index: i,
                    reason: "bad",
                })
            } else {
                Ok(Some(i))
            }
        });
        assert_eq!(produced, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_scan_empty_range() {
        let produced: Vec<usize> = scan_indices("test", 3..3, |i| Ok(Some(i)));
        assert!(produced.is_empty());
    }

    #[test]
    fn test_check_window_reports_absolute_index() {
        let mut candles: Vec<Candle> = (0..6).map(candle).collect();
        candles[4].low = f64::NAN;

        assert!(check_window(&candles, 0..4).is_ok());
        let err = check_window(&candles, 2..6).unwrap_err();
        assert_eq!(
            err,
            ScanError::MalformedCandle {
                index: 4,
                reason: "non-finite price"
            }
        );
    }

    #[test]
    fn test_ensure_ordered() {
        let candles: Vec<Candle> = (0..4).map(candle).collect();
        assert!(ensure_ordered(&candles).is_ok());
        assert!(ensure_ordered(&[]).is_ok());

        let unordered = vec![candle(0), candle(2), candle(1)];
        assert_eq!(
            ensure_ordered(&unordered),
            Err(DetectError::UnorderedSeries { index: 2 })
        );

        let duplicate = vec![candle(0), candle(0)];
        assert_eq!(
            ensure_ordered(&duplicate),
            Err(DetectError::DuplicateTimestamp { index: 1 })
        );
    }
}
