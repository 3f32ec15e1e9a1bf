//! Bar resolution offered by the aggregates service.
//!
//! ```
//! use aggregates_client::models::timespan::Timespan;
//!
//! let ts: Timespan = "week".parse().unwrap();
//! assert_eq!(ts, Timespan::Week);
//! assert_eq!(ts.label(), "Week");
//! assert_eq!(ts.as_path_segment(), "week");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown timespan: {0}")]
pub struct TimespanParseError(pub String);

/// Width of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timespan {
    Second,
    Minute,
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Timespan {
    /// Every timespan, finest first.
    pub const ALL: [Timespan; 8] = [
        Timespan::Second,
        Timespan::Minute,
        Timespan::Hour,
        Timespan::Day,
        Timespan::Week,
        Timespan::Month,
        Timespan::Quarter,
        Timespan::Year,
    ];

    /// Human-readable label used by selection lists.
    pub const fn label(self) -> &'static str {
        match self {
            Timespan::Second => "Second",
            Timespan::Minute => "Minute",
            Timespan::Hour => "Hour",
            Timespan::Day => "Day",
            Timespan::Week => "Week",
            Timespan::Month => "Month",
            Timespan::Quarter => "Quarter",
            Timespan::Year => "Year",
        }
    }

    /// Path segment understood by the aggregates REST endpoint.
    pub const fn as_path_segment(self) -> &'static str {
        match self {
            Timespan::Second => "second",
            Timespan::Minute => "minute",
            Timespan::Hour => "hour",
            Timespan::Day => "day",
            Timespan::Week => "week",
            Timespan::Month => "month",
            Timespan::Quarter => "quarter",
            Timespan::Year => "year",
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timespan {
    type Err = TimespanParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Timespan::ALL
            .into_iter()
            .find(|ts| ts.as_path_segment() == wanted)
            .ok_or_else(|| TimespanParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_segments() {
        for ts in Timespan::ALL {
            assert_eq!(ts.label().parse::<Timespan>(), Ok(ts));
            assert_eq!(ts.as_path_segment().parse::<Timespan>(), Ok(ts));
        }
        assert_eq!(" QUARTER ".parse::<Timespan>(), Ok(Timespan::Quarter));
    }

    #[test]
    fn rejects_unknown() {
        let err = "fortnight".parse::<Timespan>().unwrap_err();
        assert_eq!(err.to_string(), "unknown timespan: fortnight");
    }

    #[test]
    fn default_is_day() {
        assert_eq!(Timespan::default(), Timespan::Day);
        assert_eq!(Timespan::Day.to_string(), "Day");
    }
}
