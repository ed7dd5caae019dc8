//! Market structure detection
//!
//! Market structure shifts (a new higher high or lower low against the
//! swing two steps back) and changes of character (an early reversal in a
//! short rolling window of swings).

mod detector;

pub use detector::{StructureConfig, StructureDetector};
