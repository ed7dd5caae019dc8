//! Currency pair identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pip size for JPY-quoted pairs
const JPY_PIP: f64 = 0.01;
/// Pip size for every other pair
const STANDARD_PIP: f64 = 0.0001;

/// A currency pair such as `EUR/USD` or `USDJPY`
///
/// The pair is only used to pick the pip size; the symbol is kept verbatim
/// for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pair(String);

impl Pair {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }

    /// Minimum meaningful price increment
    pub fn pip_value(&self) -> f64 {
        if self.0.to_uppercase().contains("JPY") {
            JPY_PIP
        } else {
            STANDARD_PIP
        }
    }

    /// Convert a price distance into pips
    pub fn to_pips(&self, distance: f64) -> f64 {
        distance / self.pip_value()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Pair {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}
