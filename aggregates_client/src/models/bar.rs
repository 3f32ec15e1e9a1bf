//! Canonical in-memory representation of one aggregate bar (OHLCV).
//!
//! Every [`AggregatesSource`](crate::sources::AggregatesSource) returns bars in
//! this shape regardless of where they came from.

use serde::{Deserialize, Serialize};

/// A single OHLCV sample for a fixed time bucket.
///
/// `low <= min(open, close)` and `high >= max(open, close)` are expected from
/// upstream but never enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bucket start, milliseconds since the Unix epoch (UTC).
    pub timestamp: i64,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bucket.
    pub high: f64,

    /// Lowest price during the bucket.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Shares traded during the bucket.
    pub volume: u64,
}

impl Bar {
    /// A bar closing strictly above its open. A flat bar is bearish.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(open: f64, close: f64) -> Bar {
        Bar {
            timestamp: 1_704_153_600_000,
            open,
            high: open.max(close) + 1.0,
            low: open.min(close) - 1.0,
            close,
            volume: 100,
        }
    }

    #[test]
    fn flat_bar_is_bearish() {
        assert!(!bar(10.0, 10.0).is_bullish());
        assert!(bar(10.0, 10.5).is_bullish());
        assert!(!bar(10.0, 9.5).is_bullish());
    }

    #[test]
    fn deserializes_from_plain_json() {
        let json = r#"{"timestamp":1704153600000,"open":1.5,"high":2.0,"low":1.0,"close":1.75,"volume":1200}"#;
        let b: Bar = serde_json::from_str(json).unwrap();
        assert_eq!(b.volume, 1200);
        assert_eq!(b.close, 1.75);
    }
}
