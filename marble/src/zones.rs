//! Buy→sell intervals derived from a trade list.
//!
//! Pairing is a single forward scan over the trades in timestamp order with at
//! most one open buy:
//! - a buy while flat opens a position;
//! - a sell while a buy is open closes it into a [`Zone`];
//! - a buy while already open and a sell while flat are skipped;
//! - a buy still open at the end produces nothing.
//!
//! There is no lot sizing here. Zones exist to shade the chart, not to account
//! for positions.

use serde::{Deserialize, Serialize};

use crate::{
    format::format_label,
    trade::{Side, Trade},
};

/// One end of a zone, positioned on the category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePoint {
    pub label: String,
    pub price: f64,
}

impl ZonePoint {
    fn at(trade: &Trade) -> Self {
        Self {
            label: format_label(trade.timestamp, false),
            price: trade.price,
        }
    }
}

/// A closed buy→sell interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub start: ZonePoint,
    pub end: ZonePoint,
    /// `end.price > start.price`; a flat exit counts as a loss.
    pub is_profit: bool,
}

impl Zone {
    fn closing(buy: &Trade, sell: &Trade) -> Self {
        Self {
            start: ZonePoint::at(buy),
            end: ZonePoint::at(sell),
            is_profit: sell.price > buy.price,
        }
    }
}

/// Pairs buys with the following sells. Zones come out in the order of their
/// closing sell. Never fails: degenerate input yields an empty list.
pub fn derive_zones(trades: &[Trade]) -> Vec<Zone> {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    // stable: equal timestamps keep input order
    sorted.sort_by_key(|t| t.timestamp);

    let mut zones = Vec::new();
    let mut open_buy: Option<&Trade> = None;

    for trade in sorted {
        match (trade.side, open_buy) {
            (Side::Buy, None) => open_buy = Some(trade),
            (Side::Sell, Some(buy)) => {
                zones.push(Zone::closing(buy, trade));
                open_buy = None;
            }
            (Side::Buy, Some(_)) => {
                tracing::trace!(timestamp = trade.timestamp, "buy while a position is open, skipped");
            }
            (Side::Sell, None) => {
                tracing::trace!(timestamp = trade.timestamp, "sell without an open buy, skipped");
            }
        }
    }

    if let Some(buy) = open_buy {
        tracing::trace!(timestamp = buy.timestamp, "buy never closed, no zone");
    }

    zones
}
