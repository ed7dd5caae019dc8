//! JSON file candle source

use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::CandleSource;
use crate::candle::{Candle, Pair};

/// Reads a JSON array of candles from disk
///
/// Each element carries `timestamp` (or `datetime`), `open`, `high`, `low`,
/// `close` and an optional `volume`. The file holds a single series, so the
/// pair and timeframe only label the log output.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CandleSource for JsonFileSource {
    async fn fetch(&self, pair: &Pair, timeframe: &str) -> anyhow::Result<Vec<Candle>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read candles from {}", self.path.display()))?;

        let candles: Vec<Candle> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid candle data in {}", self.path.display()))?;

        tracing::info!(
            pair = %pair,
            timeframe,
            count = candles.len(),
            path = %self.path.display(),
            "Loaded candles"
        );
        Ok(candles)
    }
}
