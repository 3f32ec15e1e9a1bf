//! Chart core for the aggregates viewer.
//!
//! Bars from an [`AggregatesSource`](aggregates_client::sources::AggregatesSource)
//! and an optional trade list go through [`chart::build_chart`] to produce a
//! declarative [`ChartDescription`](chart::ChartDescription) for a renderer.
//! Trades are paired into shaded profit/loss zones by [`zones::derive_zones`].
//! Nothing here reads the clock or keeps global state.

pub mod chart;
pub mod config;
pub mod dummy;
pub mod format;
pub mod palette;
pub mod panel;
pub mod trade;
pub mod zones;
