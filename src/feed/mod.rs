//! Candle feed module
//!
//! Market-data provider boundary. Sources return a candle series for a pair
//! and timeframe; the analysis core never fetches data itself.

mod file;

pub use file::JsonFileSource;

use async_trait::async_trait;

use crate::candle::{Candle, Pair};

/// Trait for candle source implementations
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Fetch the candle series for a pair and timeframe
    async fn fetch(&self, pair: &Pair, timeframe: &str) -> anyhow::Result<Vec<Candle>>;
}
