//! Analysis metrics
//!
//! Recorded through the `metrics` facade. Names are prefixed `smc_`.

use std::time::Duration;

const ANALYSIS_DURATION: &str = "smc_analysis_duration_ms";
const SIGNALS_DETECTED: &str = "smc_signals_detected_total";
const DETECTOR_FAILURES: &str = "smc_detector_failures_total";
const ROWS_SKIPPED: &str = "smc_rows_skipped_total";

/// Record the wall time of one full analysis pass
pub fn record_analysis_duration(duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;
    metrics::histogram!(ANALYSIS_DURATION).record(value_ms);
    tracing::debug!(metric = ANALYSIS_DURATION, value_ms, "Recording latency");
}

/// Count signals produced by one detector category
pub fn record_signals(category: &'static str, count: usize) {
    metrics::counter!(SIGNALS_DETECTED, "category" => category).increment(count as u64);
}

/// Count a detector that failed on the whole series
pub fn record_detector_failure(category: &'static str) {
    metrics::counter!(DETECTOR_FAILURES, "category" => category).increment(1);
}

/// Count malformed rows a detector skipped
pub fn record_rows_skipped(detector: &'static str, skipped: u64) {
    metrics::counter!(ROWS_SKIPPED, "detector" => detector).increment(skipped);
}
