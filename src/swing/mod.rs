//! Swing point detection
//!
//! Local price extrema confirmed by a symmetric window of candles. The
//! structure and liquidity detectors build on these points.

mod detector;
mod types;

pub use detector::{SwingDetector, DEFAULT_SWING_WINDOW};
pub use types::{SwingKind, SwingPoint};
