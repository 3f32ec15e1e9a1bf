//! Bars recorded to a JSON file (an array of [`Bar`] objects).
//!
//! The file is read on every fetch, so edits show up without restarting.
//! Only the date range of the request is honoured; the ticker is not checked
//! because a recording holds a single symbol.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    models::{bar::Bar, request::AggregatesRequest},
    sources::{AggregatesSource, SourceError},
};

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every bar in the file, in file order.
    pub async fn read_all(&self) -> Result<Vec<Bar>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

fn day_start_millis(day: NaiveDate) -> i64 {
    day.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(i64::MIN)
}

#[async_trait]
impl AggregatesSource for JsonFileSource {
    async fn fetch_aggregates(&self, request: &AggregatesRequest) -> Result<Vec<Bar>, SourceError> {
        request.validate()?;

        let start = day_start_millis(request.from_date);
        let end = request
            .to_date
            .succ_opt()
            .map(day_start_millis)
            .unwrap_or(i64::MAX);

        let mut bars: Vec<Bar> = self
            .read_all()
            .await?
            .into_iter()
            .filter(|b| b.timestamp >= start && b.timestamp < end)
            .collect();
        bars.sort_by_key(|b| b.timestamp);

        tracing::debug!(path = %self.path.display(), bars = bars.len(), "loaded bars from file");
        Ok(bars)
    }
}
