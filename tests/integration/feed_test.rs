//! Candle source tests

use std::io::Write;

use async_trait::async_trait;
use smart_money::aggregate::SmartMoneyAnalyzer;
use smart_money::candle::{Candle, Pair};
use smart_money::feed::{CandleSource, JsonFileSource};

use crate::common::uptrend;

/// Source serving a fixed series
struct StaticSource(Vec<Candle>);

#[async_trait]
impl CandleSource for StaticSource {
    async fn fetch(&self, _pair: &Pair, _timeframe: &str) -> anyhow::Result<Vec<Candle>> {
        Ok(self.0.clone())
    }
}

async fn analyze_from(source: &dyn CandleSource) -> usize {
    let pair = Pair::new("EUR/USD");
    let candles = source.fetch(&pair, "15m").await.unwrap();
    SmartMoneyAnalyzer::new()
        .analyze(&candles, &pair, "15m")
        .all_signals
        .len()
}

#[tokio::test]
async fn test_json_file_source_matches_static_source() {
    let candles = uptrend();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&candles).unwrap().as_bytes())
        .unwrap();

    let from_file = analyze_from(&JsonFileSource::new(file.path())).await;
    let from_memory = analyze_from(&StaticSource(candles)).await;
    assert_eq!(from_file, 3);
    assert_eq!(from_file, from_memory);
}

#[tokio::test]
async fn test_json_file_source_round_trips_candles() {
    let candles = uptrend();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&candles).unwrap().as_bytes())
        .unwrap();

    let loaded = JsonFileSource::new(file.path())
        .fetch(&Pair::new("EUR/USD"), "15m")
        .await
        .unwrap();
    assert_eq!(loaded, candles);
}
