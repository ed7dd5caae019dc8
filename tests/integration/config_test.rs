//! Configuration loading tests

use std::io::Write;

use smart_money::config::Config;
use smart_money::telemetry::LogFormat;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();

    let defaults = Config::default();
    assert_eq!(config.analysis.timeframe, defaults.analysis.timeframe);
    assert_eq!(config.analysis.min_strength, defaults.analysis.min_strength);
    assert_eq!(
        config.analysis.order_block_max_age_hours,
        defaults.analysis.order_block_max_age_hours
    );
    assert_eq!(config.analysis.confluence_tolerance, defaults.analysis.confluence_tolerance);
    assert_eq!(config.gap.min_gap_pips, defaults.gap.min_gap_pips);
    assert_eq!(config.order_block.window, defaults.order_block.window);
    assert_eq!(config.structure.lookback_period, defaults.structure.lookback_period);
    assert_eq!(
        config.liquidity.equal_level_tolerance,
        defaults.liquidity.equal_level_tolerance
    );
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[analysis]\nmin_strength = 60.0\n\n[telemetry]\nlog_format = \"json\"").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.analysis.min_strength, 60.0);
    assert!(config.analysis.order_block_max_age_hours.is_none());
    assert_eq!(config.telemetry.log_format, LogFormat::Json);
}

#[test]
fn test_config_rejects_bad_types() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[gap]\nmin_gap_pips = \"three\"").unwrap();
    assert!(Config::load(file.path()).is_err());
}
