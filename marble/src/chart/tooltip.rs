use std::fmt;

use serde::Serialize;

use crate::format::{format_price, format_volume};

/// Summary of one bar, shown when hovering its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    /// Date with year, e.g. `Jan 2, 24`.
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    /// Price of a buy marker on the same category.
    pub buy: Option<f64>,
    /// Price of a sell marker on the same category.
    pub sell: Option<f64>,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date)?;
        writeln!(f, "Open: {}", format_price(self.open))?;
        writeln!(f, "Close: {}", format_price(self.close))?;
        writeln!(f, "High: {}", format_price(self.high))?;
        writeln!(f, "Low: {}", format_price(self.low))?;
        write!(f, "Volume: {}", format_volume(self.volume))?;
        if let Some(price) = self.buy {
            write!(f, "\nBUY @ {}", format_price(price))?;
        }
        if let Some(price) = self.sell {
            write!(f, "\nSELL @ {}", format_price(price))?;
        }
        Ok(())
    }
}
