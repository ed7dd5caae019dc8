//! Signal aggregation
//!
//! Runs every detector over a series and turns the combined signal list
//! into a market bias and price-confluence groups.

mod analyzer;
mod bias;
mod confluence;
mod filter;

pub use analyzer::{AnalysisReport, SmartMoneyAnalyzer};
pub use bias::{market_bias, Bias, MarketBias};
pub use confluence::{find_confluence, ConfluenceGroup, DEFAULT_CONFLUENCE_TOLERANCE};
pub use filter::{filter_by_age, filter_by_strength};
