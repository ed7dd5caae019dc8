//! Fair value gap detection
//!
//! Three-candle imbalances where the outer candles' ranges do not overlap,
//! confirmed by a strong impulse candle in the middle.

mod detector;

pub use detector::{FairValueGapConfig, FairValueGapDetector};
