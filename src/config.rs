//! Configuration types for smart-money

use serde::{Deserialize, Serialize};

use crate::gap::FairValueGapConfig;
use crate::liquidity::LiquidityConfig;
use crate::signal::DEFAULT_TIMEFRAME;
use crate::structure::StructureConfig;
use crate::telemetry::LogFormat;
use crate::zone::OrderBlockConfig;

/// Root configuration structure
///
/// Every section and field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub gap: FairValueGapConfig,
    pub order_block: OrderBlockConfig,
    pub structure: StructureConfig,
    pub liquidity: LiquidityConfig,
    pub telemetry: TelemetryConfig,
}

/// Aggregation and reporting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Timeframe label attached to every signal
    #[serde(default = "default_timeframe")]
    pub timeframe: String,

    /// Signals below this strength are left out of reports
    #[serde(default = "default_min_strength")]
    pub min_strength: f64,

    /// Relative price tolerance for confluence grouping
    #[serde(default = "default_confluence_tolerance")]
    pub confluence_tolerance: f64,

    /// When set, order blocks older than this (relative to the last candle)
    /// are dropped from reports
    #[serde(default)]
    pub order_block_max_age_hours: Option<u32>,
}

fn default_timeframe() -> String {
    DEFAULT_TIMEFRAME.to_string()
}
fn default_confluence_tolerance() -> f64 {
    0.001
}
fn default_min_strength() -> f64 {
    40.0
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timeframe: default_timeframe(),
            min_strength: default_min_strength(),
            confluence_tolerance: default_confluence_tolerance(),
            order_block_max_age_hours: None,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
