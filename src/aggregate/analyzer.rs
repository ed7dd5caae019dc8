//! Full analysis pass

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::bias::{market_bias, MarketBias};
use super::confluence::{find_confluence, ConfluenceGroup};
use super::filter::{filter_by_age, filter_by_strength};
use crate::candle::{Candle, Pair};
use crate::config::Config;
use crate::gap::FairValueGapDetector;
use crate::liquidity::LiquidityDetector;
use crate::signal::{Signal, SignalDetails, SignalDetector};
use crate::structure::StructureDetector;
use crate::telemetry;
use crate::zone::OrderBlockDetector;

/// Per-category and combined signals from one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub pair: Pair,
    pub timeframe: String,
    pub fair_value_gaps: Vec<Signal>,
    pub order_blocks: Vec<Signal>,
    pub market_structure: Vec<Signal>,
    pub liquidity_zones: Vec<Signal>,
    /// Every category combined, newest first
    pub all_signals: Vec<Signal>,
}

impl AnalysisReport {
    /// Market bias over every signal in the report
    pub fn bias(&self) -> MarketBias {
        market_bias(&self.all_signals)
    }

    /// Confluence groups over every signal in the report
    pub fn confluence(&self, price_tolerance: f64) -> Vec<ConfluenceGroup> {
        find_confluence(&self.all_signals, price_tolerance)
    }

    /// Drop signals weaker than `min_strength` from every list
    pub fn with_min_strength(self, min_strength: f64) -> Self {
        Self {
            fair_value_gaps: filter_by_strength(&self.fair_value_gaps, min_strength),
            order_blocks: filter_by_strength(&self.order_blocks, min_strength),
            market_structure: filter_by_strength(&self.market_structure, min_strength),
            liquidity_zones: filter_by_strength(&self.liquidity_zones, min_strength),
            all_signals: filter_by_strength(&self.all_signals, min_strength),
            ..self
        }
    }

    /// Drop order blocks older than `max_age` relative to `reference`
    pub fn expire_order_blocks(&mut self, reference: DateTime<Utc>, max_age: Duration) {
        self.order_blocks = filter_by_age(&self.order_blocks, reference, max_age);
        self.all_signals.retain(|s| {
            !matches!(s.details, SignalDetails::OrderBlock { .. }) || reference - s.timestamp <= max_age
        });
    }
}

/// Runs all four detectors over a candle series
#[derive(Debug, Clone, Default)]
pub struct SmartMoneyAnalyzer {
    gaps: FairValueGapDetector,
    order_blocks: OrderBlockDetector,
    structure: StructureDetector,
    liquidity: LiquidityDetector,
}

impl SmartMoneyAnalyzer {
    /// Create an analyzer with default detector configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from the detector sections of a configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            gaps: FairValueGapDetector::with_config(config.gap.clone()),
            order_blocks: OrderBlockDetector::with_config(config.order_block.clone()),
            structure: StructureDetector::with_config(config.structure.clone()),
            liquidity: LiquidityDetector::with_config(config.liquidity.clone()),
        }
    }

    /// Run every detector and combine the results
    ///
    /// A detector that rejects the series is logged and contributes nothing;
    /// the others still run. Signals are relabeled with `timeframe`.
    pub fn analyze(&self, candles: &[Candle], pair: &Pair, timeframe: &str) -> AnalysisReport {
        let start = Instant::now();
        tracing::info!(pair = %pair, timeframe, candles = candles.len(), "Starting analysis");

        let fair_value_gaps = run_detector(&self.gaps, candles, pair, timeframe);
        let order_blocks = run_detector(&self.order_blocks, candles, pair, timeframe);
        let market_structure = run_detector(&self.structure, candles, pair, timeframe);
        let liquidity_zones = run_detector(&self.liquidity, candles, pair, timeframe);

        let mut all_signals: Vec<Signal> = fair_value_gaps
            .iter()
            .chain(&order_blocks)
            .chain(&market_structure)
            .chain(&liquidity_zones)
            .cloned()
            .collect();
        all_signals.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let elapsed = start.elapsed();
        telemetry::record_analysis_duration(elapsed);
        tracing::info!(
            pair = %pair,
            signals = all_signals.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Analysis complete"
        );

        AnalysisReport {
            pair: pair.clone(),
            timeframe: timeframe.to_string(),
            fair_value_gaps,
            order_blocks,
            market_structure,
            liquidity_zones,
            all_signals,
        }
    }
}

/// Run one detector in isolation, mapping a failure to an empty list
fn run_detector(
    detector: &dyn SignalDetector,
    candles: &[Candle],
    pair: &Pair,
    timeframe: &str,
) -> Vec<Signal> {
    let category = detector.category();
    tracing::info!(category, "Running detector");

    match detector.detect(candles, pair) {
        Ok(signals) => {
            telemetry::record_signals(category, signals.len());
            tracing::debug!(category, count = signals.len(), "Detector finished");
            signals
                .into_iter()
                .map(|s| s.with_timeframe(timeframe))
                .collect()
        }
        Err(e) => {
            telemetry::record_detector_failure(category);
            tracing::error!(category, error = %e, "Detector failed");
            Vec::new()
        }
    }
}
