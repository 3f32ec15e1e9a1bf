//! State behind the aggregates data panel.
//!
//! The panel owns the request being edited, the outcome of the last fetch and
//! the bars it returned. [`PanelState::chart_view`] turns that into either a
//! chart or the explicit "no data" state; the assembler is never called with an
//! empty series.

use aggregates_client::{
    models::{bar::Bar, request::{AggregatesRequest, normalize_ticker}, timespan::Timespan},
    sources::AggregatesSource,
};
use chrono::NaiveDate;

use crate::{
    chart::{ChartDescription, build_chart_with},
    dummy::dummy_trades,
    palette::Palette,
    trade::Trade,
};

/// Shown when a fetch fails without a usable message.
pub const FALLBACK_ERROR: &str = "Failed to fetch data";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Fetched {
        count: usize,
    },
    Failed {
        message: String,
    },
}

/// What the chart area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    NoData,
    Chart(Box<ChartDescription>),
}

impl ChartView {
    pub const NO_DATA_MESSAGE: &'static str = "No data to display";

    pub fn chart(&self) -> Option<&ChartDescription> {
        match self {
            ChartView::Chart(chart) => Some(chart.as_ref()),
            ChartView::NoData => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelState {
    pub request: AggregatesRequest,
    pub status: FetchStatus,
    bars: Option<Vec<Bar>>,
}

impl PanelState {
    /// A panel pre-filled with one month of daily AAPL bars ending `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            request: AggregatesRequest::default_for(today),
            status: FetchStatus::Idle,
            bars: None,
        }
    }

    pub fn set_ticker(&mut self, raw: &str) {
        self.request.ticker = normalize_ticker(raw);
    }

    pub fn set_range(&mut self, from: NaiveDate, to: NaiveDate) {
        self.request.from_date = from;
        self.request.to_date = to;
    }

    pub fn set_timespan(&mut self, timespan: Timespan) {
        self.request.timespan = timespan;
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Bars from the last successful fetch.
    pub fn bars(&self) -> Option<&[Bar]> {
        self.bars.as_deref()
    }

    /// Runs the current request against `source`.
    ///
    /// On failure the previous bars are kept and the error text is recorded.
    pub async fn submit(&mut self, source: &dyn AggregatesSource) {
        self.status = FetchStatus::Loading;

        let outcome = match self.request.validate() {
            Ok(()) => source.fetch_aggregates(&self.request).await,
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(bars) => {
                tracing::info!(ticker = %self.request.ticker, count = bars.len(), "fetched bars");
                self.status = FetchStatus::Fetched { count: bars.len() };
                self.bars = Some(bars);
            }
            Err(e) => {
                tracing::warn!(ticker = %self.request.ticker, error = %e, "fetch failed");
                let message = e.to_string();
                self.status = FetchStatus::Failed {
                    message: if message.trim().is_empty() {
                        FALLBACK_ERROR.to_string()
                    } else {
                        message
                    },
                };
            }
        }
    }

    /// One-line status for under the form.
    pub fn status_message(&self) -> Option<String> {
        match &self.status {
            FetchStatus::Fetched { count } => Some(format!("Fetched {count} bars.")),
            FetchStatus::Failed { message } => Some(message.clone()),
            FetchStatus::Idle | FetchStatus::Loading => None,
        }
    }

    /// The chart for the current bars.
    ///
    /// `trades` wins when given; otherwise illustrative trades are generated if
    /// `use_dummy_trades` is set.
    pub fn chart_view(
        &self,
        trades: Option<&[Trade]>,
        use_dummy_trades: bool,
        palette: &Palette,
    ) -> ChartView {
        let Some(bars) = self.bars.as_deref().filter(|b| !b.is_empty()) else {
            return ChartView::NoData;
        };

        let generated;
        let active: &[Trade] = match trades {
            Some(t) => t,
            None if use_dummy_trades => {
                generated = dummy_trades(bars);
                &generated
            }
            None => &[],
        };

        match build_chart_with(bars, active, &self.request.ticker, palette) {
            Some(chart) => ChartView::Chart(Box::new(chart)),
            None => ChartView::NoData,
        }
    }
}
