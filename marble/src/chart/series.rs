//! Typed series making up a [`ChartDescription`](super::ChartDescription).
//!
//! Each kind of series the renderer draws has its own value type so the
//! assembler's output can be inspected without a renderer.

use serde::{Deserialize, Serialize};

use crate::{
    palette::Palette,
    trade::{Side, Trade},
    zones::Zone,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Series {
    Candlestick(CandlestickSeries),
    ZoneOverlay(ZoneOverlay),
    Volume(VolumeSeries),
    Marker(MarkerSeries),
}

impl Series {
    pub fn name(&self) -> &str {
        match self {
            Series::Candlestick(s) => &s.name,
            Series::ZoneOverlay(s) => &s.name,
            Series::Volume(s) => &s.name,
            Series::Marker(s) => &s.name,
        }
    }
}

/// Price values of one bar, in renderer order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
}

impl Candle {
    /// `(open, close, low, high)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.open, self.close, self.low, self.high)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickSeries {
    pub name: String,
    /// One candle per category, same order.
    pub candles: Vec<Candle>,
    pub up_color: String,
    pub down_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub value: u64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSeries {
    pub name: String,
    /// One point per category, same order.
    pub points: Vec<VolumePoint>,
}

/// A shaded rectangle spanning a [`Zone`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneOverlay {
    pub name: String,
    pub zone: Zone,
    pub fill: String,
    pub border: String,
}

impl ZoneOverlay {
    /// `ordinal` is zero-based; names start at "Zone 1".
    pub(crate) fn new(ordinal: usize, zone: Zone, palette: &Palette) -> Self {
        let (fill, border) = if zone.is_profit {
            (&palette.bullish_zone, &palette.bullish)
        } else {
            (&palette.bearish_zone, &palette.bearish)
        };
        Self {
            name: format!("Zone {}", ordinal + 1),
            fill: fill.clone(),
            border: border.clone(),
            zone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    Triangle,
}

/// A trade drawn at `(label, price)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub label: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSeries {
    pub name: String,
    pub side: Side,
    pub symbol: MarkerSymbol,
    /// Degrees; sells point down.
    pub rotation: u16,
    pub color: String,
    pub points: Vec<MarkerPoint>,
}

impl MarkerSeries {
    pub(crate) fn for_side(
        side: Side,
        trades: &[Trade],
        label_of: impl Fn(i64) -> String,
        palette: &Palette,
    ) -> Self {
        let (rotation, color) = match side {
            Side::Buy => (0, palette.bullish.clone()),
            Side::Sell => (180, palette.bearish.clone()),
        };
        let points = trades
            .iter()
            .filter(|t| t.side == side)
            .map(|t| MarkerPoint {
                label: label_of(t.timestamp),
                price: t.price,
            })
            .collect();
        Self {
            name: side.label().to_string(),
            side,
            symbol: MarkerSymbol::Triangle,
            rotation,
            color,
            points,
        }
    }

    /// First marker placed on the category `label`.
    pub fn point_at(&self, label: &str) -> Option<&MarkerPoint> {
        self.points.iter().find(|p| p.label == label)
    }
}
