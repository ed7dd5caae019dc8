//! Analyze command implementation

use chrono::Duration;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::aggregate::{AnalysisReport, ConfluenceGroup, MarketBias, SmartMoneyAnalyzer};
use crate::candle::{sanitize, Pair};
use crate::config::Config;
use crate::feed::{CandleSource, JsonFileSource};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per signal plus bias and confluence summaries
    Table,
    /// The full report as pretty-printed JSON
    Json,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of candles
    #[arg(long)]
    pub input: PathBuf,

    /// Currency pair, e.g. EUR/USD
    #[arg(long)]
    pub pair: String,

    /// Timeframe label (defaults to the configured one)
    #[arg(long)]
    pub timeframe: Option<String>,

    /// Minimum signal strength to report (defaults to the configured one)
    #[arg(long)]
    pub min_strength: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Everything the analyze command prints
#[derive(Debug, Serialize)]
struct AnalysisOutput<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    bias: MarketBias,
    confluence: Vec<ConfluenceGroup>,
}

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let output = self.run(config).await?;
        println!("{output}");
        Ok(())
    }

    /// Load, analyze and render the report
    pub async fn run(&self, config: &Config) -> anyhow::Result<String> {
        let pair = Pair::new(self.pair.as_str());
        let timeframe = self
            .timeframe
            .clone()
            .unwrap_or_else(|| config.analysis.timeframe.clone());
        let min_strength = self.min_strength.unwrap_or(config.analysis.min_strength);

        let source = JsonFileSource::new(&self.input);
        let (candles, cleaned) = sanitize(source.fetch(&pair, &timeframe).await?);
        tracing::debug!(kept = candles.len(), dropped = cleaned.dropped(), "Sanitized candle series");

        let analyzer = SmartMoneyAnalyzer::from_config(config);
        let mut report = analyzer.analyze(&candles, &pair, &timeframe);
        let max_age = config.analysis.order_block_max_age_hours;
        if let (Some(last), Some(hours)) = (candles.last(), max_age) {
            report.expire_order_blocks(last.timestamp, Duration::hours(i64::from(hours)));
        }
        let report = report.with_min_strength(min_strength);

        let output = AnalysisOutput {
            bias: report.bias(),
            confluence: report.confluence(config.analysis.confluence_tolerance),
            report: &report,
        };

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
            OutputFormat::Table => Ok(render_table(&output)),
        }
    }
}

fn render_table(output: &AnalysisOutput<'_>) -> String {
    let report = output.report;
    let mut lines = vec![
        format!("Smart money analysis: {} ({})", report.pair, report.timeframe),
        format!(
            "  FVG: {}  OB: {}  Structure: {}  Liquidity: {}",
            report.fair_value_gaps.len(),
            report.order_blocks.len(),
            report.market_structure.len(),
            report.liquidity_zones.len()
        ),
        String::new(),
        format!("Signals ({}):", report.all_signals.len()),
    ];
    lines.extend(report.all_signals.iter().map(|s| format!("  {s}")));

    lines.push(String::new());
    lines.push(format!(
        "Bias: {} ({:.1}%) - {}",
        output.bias.bias, output.bias.confidence, output.bias.reasoning
    ));

    lines.push(String::new());
    lines.push(format!("Confluence zones ({}):", output.confluence.len()));
    for group in &output.confluence {
        let kinds: Vec<&str> = group.signal_kinds.iter().map(|k| k.as_str()).collect();
        lines.push(format!(
            "  {:.5} | {} signals | {:.1}% | {} | {}",
            group.avg_price,
            group.signal_count,
            group.combined_strength,
            group.dominant_direction,
            kinds.join(", ")
        ));
    }

    lines.join("\n")
}
