//! Candle fixtures shared by unit tests

use chrono::{DateTime, Duration, TimeZone, Utc};
use metrics::{
    Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::candle::Candle;

/// Half-spread between a fixture candle's mid and its high/low
pub(crate) const WICK: f64 = 0.0002;

/// Timestamp of the `i`-th 15 minute candle
pub(crate) fn bar_time(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::minutes(15 * i as i64)
}

/// Doji candle centred on `mid`
pub(crate) fn doji(i: usize, mid: f64) -> Candle {
    Candle::new(bar_time(i), mid, mid + WICK, mid - WICK, mid)
}

/// Series moving linearly between `pivots`, one pivot every `spacing` candles
///
/// Pivot `k` sits at index `k * spacing`; alternate high and low pivots
/// produce one swing point per interior pivot.
pub(crate) fn zigzag(pivots: &[f64], spacing: usize) -> Vec<Candle> {
    let mut mids = Vec::new();
    for pair in pivots.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        for step in 0..spacing {
            mids.push(from + (to - from) * step as f64 / spacing as f64);
        }
    }
    if let Some(last) = pivots.last() {
        mids.push(*last);
    }
    mids.iter().enumerate().map(|(i, m)| doji(i, *m)).collect()
}

/// Metrics recorder that tallies counters as `name{label=value,...}`
#[derive(Default)]
pub(crate) struct CountingRecorder {
    counts: Arc<Mutex<HashMap<String, u64>>>,
}

impl CountingRecorder {
    pub(crate) fn count(&self, key: &str) -> u64 {
        self.counts.lock().unwrap().get(key).copied().unwrap_or(0)
    }
}

struct Tally {
    key: String,
    counts: Arc<Mutex<HashMap<String, u64>>>,
}

impl CounterFn for Tally {
    fn increment(&self, value: u64) {
        *self.counts.lock().unwrap().entry(self.key.clone()).or_default() += value;
    }

    fn absolute(&self, value: u64) {
        self.counts.lock().unwrap().insert(self.key.clone(), value);
    }
}

impl Recorder for CountingRecorder {
    fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
    fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
    fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

    fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
        let labels: Vec<String> = key
            .labels()
            .map(|l| format!("{}={}", l.key(), l.value()))
            .collect();
        Counter::from_arc(Arc::new(Tally {
            key: format!("{}{{{}}}", key.name(), labels.join(",")),
            counts: Arc::clone(&self.counts),
        }))
    }

    fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}
