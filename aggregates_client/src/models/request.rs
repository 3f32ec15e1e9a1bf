use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::timespan::Timespan;

/// Ticker pre-filled when the data panel opens.
pub const DEFAULT_TICKER: &str = "AAPL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("ticker is required")]
    EmptyTicker,

    #[error("from_date {from} is after to_date {to}")]
    InvertedRange { from: NaiveDate, to: NaiveDate },

    #[error("date not ISO YYYY-MM-DD: {0}")]
    BadDate(String),
}

/// Parameters for one aggregates query.
///
/// Both dates are inclusive calendar days. The ticker is stored upper-cased.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatesRequest {
    /// Symbol to query (e.g. `"AAPL"`).
    pub ticker: String,

    /// First day of the range.
    pub from_date: NaiveDate,

    /// Last day of the range.
    pub to_date: NaiveDate,

    /// Bar width.
    pub timespan: Timespan,
}

impl AggregatesRequest {
    pub fn new(
        ticker: impl AsRef<str>,
        from_date: NaiveDate,
        to_date: NaiveDate,
        timespan: Timespan,
    ) -> Self {
        Self {
            ticker: normalize_ticker(ticker.as_ref()),
            from_date,
            to_date,
            timespan,
        }
    }

    /// The request a fresh panel starts with: one calendar month of daily
    /// bars ending on `today`.
    ///
    /// `today` is supplied by the caller so this stays clock-free.
    pub fn default_for(today: NaiveDate) -> Self {
        let from_date = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        Self::new(DEFAULT_TICKER, from_date, today, Timespan::Day)
    }

    /// Rejects requests the aggregates service would refuse.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.ticker.is_empty() {
            return Err(RequestError::EmptyTicker);
        }
        if self.from_date > self.to_date {
            return Err(RequestError::InvertedRange {
                from: self.from_date,
                to: self.to_date,
            });
        }
        Ok(())
    }
}

/// Trims and upper-cases a ticker the way the input form does.
pub fn normalize_ticker(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| RequestError::BadDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn ticker_is_upper_cased() {
        let req = AggregatesRequest::new(" msft ", d(2024, 1, 1), d(2024, 2, 1), Timespan::Hour);
        assert_eq!(req.ticker, "MSFT");
    }

    #[test]
    fn default_spans_one_month_of_days() {
        let req = AggregatesRequest::default_for(d(2024, 3, 31));
        assert_eq!(req.ticker, "AAPL");
        // chrono clamps to the last day of the shorter month
        assert_eq!(req.from_date, d(2024, 2, 29));
        assert_eq!(req.to_date, d(2024, 3, 31));
        assert_eq!(req.timespan, Timespan::Day);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_ticker_rejected() {
        let req = AggregatesRequest::new("   ", d(2024, 1, 1), d(2024, 1, 2), Timespan::Day);
        assert_eq!(req.validate(), Err(RequestError::EmptyTicker));
    }

    #[test]
    fn inverted_range_rejected() {
        let req = AggregatesRequest::new("AAPL", d(2024, 2, 1), d(2024, 1, 1), Timespan::Day);
        assert!(matches!(req.validate(), Err(RequestError::InvertedRange { .. })));
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_iso_date("2024-05-06"), Ok(d(2024, 5, 6)));
        assert_eq!(
            parse_iso_date("05/06/2024"),
            Err(RequestError::BadDate("05/06/2024".into()))
        );
    }
}
