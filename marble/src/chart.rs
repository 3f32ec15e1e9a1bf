//! Chart assembly: bars + trades + ticker → [`ChartDescription`].
//!
//! The description is a plain value. It holds every category label, every
//! series and enough per-bar data to answer tooltip queries, and nothing that
//! points back at caller state. Identical inputs give identical descriptions.
//!
//! Series are emitted in draw order: candlesticks, one overlay per zone
//! (`Zone 1`, `Zone 2`, ...), volume, buy markers, sell markers.

pub mod series;
pub mod tooltip;

use aggregates_client::models::bar::Bar;
use serde::{Deserialize, Serialize};

use crate::{
    format::format_label,
    palette::Palette,
    trade::{Side, Trade},
    zones::derive_zones,
};

use self::{
    series::{
        Candle, CandlestickSeries, MarkerSeries, Series, VolumePoint, VolumeSeries, ZoneOverlay,
    },
    tooltip::Tooltip,
};

/// Entries shown in the legend, in order.
pub const LEGEND: [&str; 4] = ["Candlestick", "Buy", "Sell", "Volume"];

/// One slot on the x axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub timestamp: i64,
    pub label: String,
}

/// The x axis shared by the price and volume panes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub categories: Vec<Category>,
}

impl CategoryAxis {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.label.as_str())
    }
}

/// Everything a renderer needs to draw the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    /// The ticker.
    pub title: String,
    pub legend: Vec<String>,
    pub category_axis: CategoryAxis,
    pub series: Vec<Series>,
}

/// Builds the chart with the default [`Palette`].
///
/// Returns `None` for an empty bar sequence; callers show a "no data" state
/// instead of a chart with empty series.
pub fn build_chart(bars: &[Bar], trades: &[Trade], ticker: &str) -> Option<ChartDescription> {
    build_chart_with(bars, trades, ticker, &Palette::default())
}

/// Same as [`build_chart`] with explicit colours.
pub fn build_chart_with(
    bars: &[Bar],
    trades: &[Trade],
    ticker: &str,
    palette: &Palette,
) -> Option<ChartDescription> {
    if bars.is_empty() {
        return None;
    }

    let label_of = |timestamp: i64| format_label(timestamp, false);

    let categories = bars
        .iter()
        .map(|bar| Category {
            timestamp: bar.timestamp,
            label: label_of(bar.timestamp),
        })
        .collect();

    let candles = bars
        .iter()
        .map(|bar| Candle {
            open: bar.open,
            close: bar.close,
            low: bar.low,
            high: bar.high,
        })
        .collect();

    let volume_points = bars
        .iter()
        .map(|bar| VolumePoint {
            value: bar.volume,
            color: if bar.is_bullish() {
                palette.bullish_faded.clone()
            } else {
                palette.bearish_faded.clone()
            },
        })
        .collect();

    let zones = derive_zones(trades);
    let zone_count = zones.len();

    let mut series = Vec::with_capacity(zone_count + 4);
    series.push(Series::Candlestick(CandlestickSeries {
        name: LEGEND[0].to_string(),
        candles,
        up_color: palette.bullish.clone(),
        down_color: palette.bearish.clone(),
    }));
    series.extend(
        zones
            .into_iter()
            .enumerate()
            .map(|(i, zone)| Series::ZoneOverlay(ZoneOverlay::new(i, zone, palette))),
    );
    series.push(Series::Volume(VolumeSeries {
        name: LEGEND[3].to_string(),
        points: volume_points,
    }));
    series.push(Series::Marker(MarkerSeries::for_side(
        Side::Buy, trades, label_of, palette,
    )));
    series.push(Series::Marker(MarkerSeries::for_side(
        Side::Sell, trades, label_of, palette,
    )));

    tracing::debug!(
        ticker,
        bars = bars.len(),
        trades = trades.len(),
        zones = zone_count,
        "chart assembled"
    );

    Some(ChartDescription {
        title: ticker.to_string(),
        legend: LEGEND.iter().map(|s| s.to_string()).collect(),
        category_axis: CategoryAxis { categories },
        series,
    })
}

impl ChartDescription {
    pub fn candlestick(&self) -> Option<&CandlestickSeries> {
        self.series.iter().find_map(|s| match s {
            Series::Candlestick(c) => Some(c),
            _ => None,
        })
    }

    pub fn volume(&self) -> Option<&VolumeSeries> {
        self.series.iter().find_map(|s| match s {
            Series::Volume(v) => Some(v),
            _ => None,
        })
    }

    pub fn zones(&self) -> impl Iterator<Item = &ZoneOverlay> {
        self.series.iter().filter_map(|s| match s {
            Series::ZoneOverlay(z) => Some(z),
            _ => None,
        })
    }

    pub fn markers(&self, side: Side) -> Option<&MarkerSeries> {
        self.series.iter().find_map(|s| match s {
            Series::Marker(m) if m.side == side => Some(m),
            _ => None,
        })
    }

    /// Tooltip for the bar at `index`, or `None` past the end of the axis.
    ///
    /// A marker belongs to the last category carrying its label, which is
    /// where a category axis draws it. Earlier bars sharing that label (several
    /// intraday bars on one day) report no marker.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let categories = &self.category_axis.categories;
        let category = categories.get(index)?;
        let candle = self.candlestick()?.candles.get(index)?;
        let volume = self.volume()?.points.get(index)?.value;

        let owns_label = categories
            .iter()
            .rposition(|c| c.label == category.label)
            == Some(index);
        let price_at = |side| {
            if !owns_label {
                return None;
            }
            self.markers(side)
                .and_then(|m| m.point_at(&category.label))
                .map(|p| p.price)
        };

        Some(Tooltip {
            date: format_label(category.timestamp, true),
            open: candle.open,
            close: candle.close,
            high: candle.high,
            low: candle.low,
            volume,
            buy: price_at(Side::Buy),
            sell: price_at(Side::Sell),
        })
    }
}
