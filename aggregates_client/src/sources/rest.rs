//! REST source for the aggregates service.
//!
//! Speaks the Polygon-style custom-bars endpoint
//! (`/v2/aggs/ticker/{ticker}/range/{multiplier}/{timespan}/{from}/{to}`)
//! and follows `next_url` pagination until the range is exhausted.

pub mod response;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    env::get_env_var,
    models::{bar::Bar, request::AggregatesRequest},
    sources::{AggregatesSource, SourceError, rest::response::AggregatesResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_API_KEY_ENV: &str = "POLYGON_API_KEY";
pub const DEFAULT_LIMIT: u32 = 5000;

pub struct RestSource {
    client: Client,
    base_url: String,
    api_key: SecretString,
    multiplier: u32,
    limit: u32,
}

impl RestSource {
    /// Creates a source talking to `base_url` with the given key.
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Result<Self, SourceError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            multiplier: 1,
            limit: DEFAULT_LIMIT,
        })
    }

    /// Creates a source reading its API key from the `api_key_env` variable.
    pub fn from_env(base_url: impl Into<String>, api_key_env: &str) -> Result<Self, SourceError> {
        let api_key = SecretString::new(get_env_var(api_key_env)?.into());
        Self::new(base_url, api_key)
    }

    /// Replaces the HTTP client, e.g. to set timeouts or proxy rules.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Bars per bucket, e.g. 5 with a minute timespan gives 5-minute bars. 0 becomes 1.
    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier.max(1);
        self
    }

    /// Page size requested from the service. 0 becomes 1.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// URL of the first page for `request`, without query string.
    pub fn aggregates_url(&self, request: &AggregatesRequest) -> String {
        format!(
            "{}/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            self.base_url,
            request.ticker,
            self.multiplier,
            request.timespan.as_path_segment(),
            request.from_date.format("%Y-%m-%d"),
            request.to_date.format("%Y-%m-%d"),
        )
    }

    fn first_page_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("adjusted", "true".to_string()),
            ("sort", "asc".to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    async fn fetch_page(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<AggregatesResponse, SourceError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("apiKey", self.api_key.expose_secret())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(SourceError::Api(format!("{status}: {body}")));
        }

        let page = response.json::<AggregatesResponse>().await?;
        if let Some(message) = page.error_message() {
            return Err(SourceError::Api(message));
        }
        Ok(page)
    }
}

#[async_trait]
impl AggregatesSource for RestSource {
    async fn fetch_aggregates(&self, request: &AggregatesRequest) -> Result<Vec<Bar>, SourceError> {
        request.validate()?;

        let mut bars: Vec<Bar> = Vec::new();
        let mut url = self.aggregates_url(request);
        let mut query = self.first_page_query();
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(&url, &query).await?;
            pages += 1;

            let batch = page.results.unwrap_or_default();
            tracing::debug!(ticker = %request.ticker, page = pages, bars = batch.len(), "fetched aggregates page");
            bars.extend(batch.into_iter().map(Bar::from));

            // next_url already carries the cursor and the original query
            match page.next_url {
                Some(next) => {
                    url = next;
                    query.clear();
                }
                None => break,
            }
        }

        tracing::info!(ticker = %request.ticker, bars = bars.len(), pages, "aggregates fetched");
        Ok(bars)
    }
}
