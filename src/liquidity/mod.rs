//! Liquidity detection
//!
//! Equal highs and equal lows: swing points clustered at nearly the same
//! price, where resting stop orders are assumed to sit.

mod detector;

pub use detector::{cluster_equal_levels, LiquidityConfig, LiquidityDetector};
