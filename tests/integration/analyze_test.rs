//! End-to-end analysis tests

use std::io::Write;

use chrono::{Duration, TimeZone, Utc};
use smart_money::aggregate::{market_bias, Bias, SmartMoneyAnalyzer};
use smart_money::candle::{Candle, Pair};
use smart_money::cli::{AnalyzeArgs, OutputFormat};
use smart_money::config::Config;
use smart_money::signal::SignalKind;

use crate::common::{bar_time, uptrend};

fn write_candles(candles: &[Candle]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(candles).unwrap().as_bytes())
        .unwrap();
    file
}

fn args(file: &tempfile::NamedTempFile, format: OutputFormat) -> AnalyzeArgs {
    AnalyzeArgs {
        input: file.path().to_path_buf(),
        pair: "EUR/USD".to_string(),
        timeframe: Some("15m".to_string()),
        min_strength: None,
        format,
    }
}

#[test]
fn test_structure_signals_end_to_end() {
    let report = SmartMoneyAnalyzer::new().analyze(&uptrend(), &Pair::new("EUR/USD"), "15m");

    let kinds: Vec<SignalKind> = report.all_signals.iter().map(|s| s.kind).collect();
    // newest first; equal timestamps keep detector order
    assert_eq!(
        kinds,
        vec![
            SignalKind::MssBullish,
            SignalKind::ChochBearish,
            SignalKind::MssBullish
        ]
    );
    assert_eq!(report.all_signals[0].timestamp, bar_time(30));

    let bias = report.bias();
    assert_eq!(bias.bias, Bias::Bullish);
    assert_eq!(bias.confidence, 69.6);
    assert_eq!(
        bias.reasoning,
        "1 strong signals of 3 total. Bullish: 69.6%, Bearish: 30.4%"
    );
}

#[test]
fn test_fair_value_gap_end_to_end() {
    let at = |h: i64| Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::hours(h);
    let candles = vec![
        Candle::new(at(0), 1.1010, 1.1020, 1.1000, 1.1005),
        Candle::new(at(1), 1.0960, 1.0995, 1.0955, 1.0990),
        Candle::new(at(2), 1.0945, 1.0950, 1.0930, 1.0940),
    ];

    let report = SmartMoneyAnalyzer::new().analyze(&candles, &Pair::new("EUR/USD"), "1h");
    assert_eq!(report.fair_value_gaps.len(), 1);
    assert_eq!(report.all_signals.len(), 1);
    assert_eq!(report.all_signals[0].timeframe, "1h");
    assert!((report.all_signals[0].price - 1.0975).abs() < 1e-9);

    let bias = market_bias(&report.all_signals);
    assert_eq!(bias.bias, Bias::Bullish);
    assert_eq!(bias.confidence, 100.0);
}

#[test]
fn test_report_serializes_wire_names() {
    let report = SmartMoneyAnalyzer::new().analyze(&uptrend(), &Pair::new("EUR/USD"), "15m");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["pair"], "EUR/USD");
    let first = &json["all_signals"][0];
    assert_eq!(first["kind"], "MSS_Bullish");
    assert_eq!(first["direction"], "bullish");
    assert_eq!(first["details"]["type"], "structure_shift");
    assert_eq!(first["details"]["structure"], "higher_high");
}

#[tokio::test]
async fn test_cli_json_output() {
    let file = write_candles(&uptrend());
    let output = args(&file, OutputFormat::Json)
        .run(&Config::default())
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["timeframe"], "15m");
    assert_eq!(json["all_signals"].as_array().unwrap().len(), 3);
    assert_eq!(json["bias"]["bias"], "BULLISH");
    assert!(json["confluence"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cli_sorts_unordered_input() {
    let mut candles = uptrend();
    candles.reverse();
    let file = write_candles(&candles);

    let output = args(&file, OutputFormat::Json)
        .run(&Config::default())
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["market_structure"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_cli_min_strength_and_table() {
    let file = write_candles(&uptrend());
    let mut args = args(&file, OutputFormat::Table);
    args.min_strength = Some(65.0);

    let output = args.run(&Config::default()).await.unwrap();
    assert!(output.contains("Smart money analysis: EUR/USD (15m)"));
    assert!(output.contains("Signals (2):"));
    assert!(output.contains("MSS Bullish (bullish)"));
    // 100 bullish against 70 bearish is short of the 60% dominance share
    assert!(output.contains(
        "Bias: NEUTRAL (50.0%) - 1 strong signals of 2 total. Bullish: 58.8%, Bearish: 41.2%"
    ));
}

#[tokio::test]
async fn test_cli_missing_input() {
    let args = AnalyzeArgs {
        input: "/nonexistent/candles.json".into(),
        pair: "EUR/USD".to_string(),
        timeframe: None,
        min_strength: None,
        format: OutputFormat::Json,
    };
    assert!(args.run(&Config::default()).await.is_err());
}

/// Bearish candle at bar 6 followed by a rally, then a long flat plateau
fn aged_order_block_series() -> Vec<Candle> {
    let flat = |i: usize, mid: f64| Candle::new(bar_time(i), mid, mid + 0.0002, mid - 0.0002, mid);
    let mut candles: Vec<Candle> = (0..6).map(|i| flat(i, 1.1000)).collect();
    candles.push(Candle::new(bar_time(6), 1.1004, 1.1005, 1.0995, 1.0996));
    candles.push(Candle::new(bar_time(7), 1.0997, 1.1012, 1.0996, 1.1010));
    candles.push(Candle::new(bar_time(8), 1.1010, 1.1020, 1.1008, 1.1018));
    candles.extend((9..24).map(|i| flat(i, 1.1018)));
    candles
}

#[tokio::test]
async fn test_cli_order_block_ageing_is_opt_in() {
    let file = write_candles(&aged_order_block_series());

    let mut config = Config::default();
    let output = args(&file, OutputFormat::Json).run(&config).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["order_blocks"].as_array().unwrap().len(), 1);

    // the block sits more than four hours before the last candle
    config.analysis.order_block_max_age_hours = Some(1);
    let output = args(&file, OutputFormat::Json).run(&config).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(json["order_blocks"].as_array().unwrap().is_empty());
    assert!(json["all_signals"]
        .as_array()
        .unwrap()
        .iter()
        .all(|s| s["kind"] != "OB_Bullish"));
}
