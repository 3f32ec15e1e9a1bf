//! Illustrative trades for charts that have no real ones.
//!
//! Four round trips are placed at fixed fractions of the series: two winners
//! (buy the low, sell the high) and two losers (buy the high, sell the low).

use aggregates_client::models::bar::Bar;

use crate::trade::Trade;

/// Below this many bars no trades are generated.
pub const MIN_BARS: usize = 10;

#[derive(Clone, Copy)]
enum Outcome {
    Win,
    Loss,
}

/// (buy %, sell %, outcome) of each round trip, as percentages of the series length.
const ROUND_TRIPS: [(usize, usize, Outcome); 4] = [
    (10, 25, Outcome::Win),
    (35, 50, Outcome::Loss),
    (60, 75, Outcome::Win),
    (80, 95, Outcome::Loss),
];

fn index_at(len: usize, percent: usize) -> usize {
    len * percent / 100
}

/// Returns four buy/sell pairs anchored on `bars`, or nothing when there are
/// fewer than [`MIN_BARS`] bars.
pub fn dummy_trades(bars: &[Bar]) -> Vec<Trade> {
    if bars.len() < MIN_BARS {
        return Vec::new();
    }

    let mut trades = Vec::with_capacity(ROUND_TRIPS.len() * 2);
    for (buy_pct, sell_pct, outcome) in ROUND_TRIPS {
        let (Some(entry), Some(exit)) = (
            bars.get(index_at(bars.len(), buy_pct)),
            bars.get(index_at(bars.len(), sell_pct)),
        ) else {
            continue;
        };
        let (buy_price, sell_price) = match outcome {
            Outcome::Win => (entry.low, exit.high),
            Outcome::Loss => (entry.high, exit.low),
        };
        trades.push(Trade::buy(entry.timestamp, buy_price));
        trades.push(Trade::sell(exit.timestamp, sell_price));
    }
    trades
}
