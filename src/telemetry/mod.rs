//! Telemetry module
//!
//! Structured logging and metrics

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use self::metrics::{
    record_analysis_duration, record_detector_failure, record_rows_skipped, record_signals,
};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
///
/// Metrics go through the `metrics` facade; embedding applications install
/// their own recorder, otherwise recording is a no-op.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}
