//! Shared candle fixtures

use chrono::{DateTime, Duration, TimeZone, Utc};
use smart_money::candle::Candle;

pub const WICK: f64 = 0.0002;

/// Pivots of a rising market: higher highs and higher lows
pub const UPTREND: [f64; 8] = [1.1000, 1.1050, 1.1020, 1.1080, 1.1040, 1.1110, 1.1060, 1.1090];

pub fn bar_time(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::minutes(15 * i as i64)
}

/// Doji candles moving linearly between pivots, one pivot every `spacing` bars
pub fn zigzag(pivots: &[f64], spacing: usize) -> Vec<Candle> {
    let mut mids = Vec::new();
    for pair in pivots.windows(2) {
        for step in 0..spacing {
            mids.push(pair[0] + (pair[1] - pair[0]) * step as f64 / spacing as f64);
        }
    }
    mids.extend(pivots.last().copied());
    mids.iter()
        .enumerate()
        .map(|(i, m)| Candle::new(bar_time(i), *m, m + WICK, m - WICK, *m))
        .collect()
}

pub fn uptrend() -> Vec<Candle> {
    zigzag(&UPTREND, 6)
}
