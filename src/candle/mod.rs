//! Candle series types
//!
//! OHLC candles, currency pair pip handling and series sanitizing

mod pair;
mod sanitize;
mod types;

pub use pair::Pair;
pub use sanitize::{sanitize, SanitizeReport};
pub use types::Candle;
