//! Integration tests for smart-money

mod analyze_test;
mod common;
mod config_test;
mod feed_test;
