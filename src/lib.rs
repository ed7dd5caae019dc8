//! smart-money: smart money concept signal detection for OHLC candle series
//!
//! This library provides the core components for:
//! - Swing point detection
//! - Fair value gaps, order blocks, market structure and liquidity levels
//! - Strength scoring in [0, 100] for every signal
//! - Market bias and price confluence over combined signals
//! - Candle sources, configuration and the command line front end
//! - Structured logging and metrics

pub mod aggregate;
pub mod candle;
pub mod cli;
pub mod config;
pub mod feed;
pub mod gap;
pub mod liquidity;
pub mod scoring;
pub mod signal;
pub mod structure;
pub mod swing;
pub mod telemetry;
pub mod zone;

#[cfg(test)]
mod test_support;
