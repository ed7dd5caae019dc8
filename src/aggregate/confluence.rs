//! Price confluence groups

use serde::{Deserialize, Serialize};

use crate::scoring::group_by_price;
use crate::signal::{Direction, Signal, SignalKind};

/// Relative price tolerance used when none is configured
pub const DEFAULT_CONFLUENCE_TOLERANCE: f64 = 0.001;
/// Multiplier applied to the mean strength of a confluence group
const CONFLUENCE_BONUS: f64 = 1.2;

/// Two or more signals sitting at nearly the same price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfluenceGroup {
    pub signals: Vec<Signal>,
    pub avg_price: f64,
    pub combined_strength: f64,
    pub dominant_direction: Direction,
    pub signal_count: usize,
    /// Distinct kinds in the group, in first-seen order
    pub signal_kinds: Vec<SignalKind>,
}

impl ConfluenceGroup {
    fn from_signals(signals: Vec<Signal>) -> Self {
        let count = signals.len();
        let avg_price = signals.iter().map(|s| s.price).sum::<f64>() / count as f64;
        let mean_strength = signals.iter().map(|s| s.strength).sum::<f64>() / count as f64;

        let bullish = signals.iter().filter(|s| s.is_bullish()).count();
        let bearish = count - bullish;
        let dominant_direction = if bullish > bearish {
            Direction::Bullish
        } else {
            Direction::Bearish
        };

        let mut signal_kinds = Vec::new();
        for signal in &signals {
            if !signal_kinds.contains(&signal.kind) {
                signal_kinds.push(signal.kind);
            }
        }

        Self {
            avg_price,
            combined_strength: (mean_strength * CONFLUENCE_BONUS).min(100.0),
            dominant_direction,
            signal_count: count,
            signal_kinds,
            signals,
        }
    }
}

/// Group signals by price and rank the groups by combined strength
///
/// Grouping is greedy in input order; ties in combined strength keep that
/// order.
pub fn find_confluence(signals: &[Signal], price_tolerance: f64) -> Vec<ConfluenceGroup> {
    let mut groups: Vec<ConfluenceGroup> = group_by_price(signals, |s| s.price, price_tolerance)
        .into_iter()
        .map(ConfluenceGroup::from_signals)
        .collect();

    groups.sort_by(|a, b| b.combined_strength.total_cmp(&a.combined_strength));
    groups
}
