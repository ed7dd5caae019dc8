//! Order block detection
//!
//! The last opposite-colored candle before a strong move, read as a
//! supply or demand zone.

mod detector;

pub use detector::{OrderBlockConfig, OrderBlockDetector};
