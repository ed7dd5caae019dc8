//! CLI interface for smart-money
//!
//! Provides subcommands for:
//! - `analyze`: Run the full analysis over a candle file
//! - `config`: Show the effective configuration

mod analyze;

pub use analyze::{AnalyzeArgs, OutputFormat};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "smart-money")]
#[command(about = "Smart money concept signal detection for OHLC candle series")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a candle series
    Analyze(AnalyzeArgs),
    /// Show the effective configuration
    Config,
}
