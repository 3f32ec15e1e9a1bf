//! Trades plotted on top of the price chart.

use serde::{Deserialize, Serialize};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub const fn label(self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

/// One execution. Trades arrive in any order; consumers sort as needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Execution time, milliseconds since the Unix epoch (UTC).
    pub timestamp: i64,
    pub price: f64,
    pub side: Side,
    /// Carried through for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl Trade {
    pub fn buy(timestamp: i64, price: f64) -> Self {
        Self {
            timestamp,
            price,
            side: Side::Buy,
            quantity: None,
        }
    }

    pub fn sell(timestamp: i64, price: f64) -> Self {
        Self {
            timestamp,
            price,
            side: Side::Sell,
            quantity: None,
        }
    }
}
