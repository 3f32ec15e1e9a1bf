//! Source abstraction for aggregate bars.
//!
//! [`AggregatesSource`] is the single seam between the chart front-end and
//! whatever serves bars: the remote aggregates service ([`rest::RestSource`])
//! or a recorded JSON file ([`json_file::JsonFileSource`]).
//!
//! The trait is async and object safe, so callers can pick an implementation at
//! runtime and hold it as `Box<dyn AggregatesSource>`.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use aggregates_client::models::{bar::Bar, request::AggregatesRequest};
//! use aggregates_client::sources::{AggregatesSource, SourceError};
//!
//! struct Canned(Vec<Bar>);
//!
//! #[async_trait]
//! impl AggregatesSource for Canned {
//!     async fn fetch_aggregates(&self, _request: &AggregatesRequest) -> Result<Vec<Bar>, SourceError> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

pub mod json_file;
pub mod rest;

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    env::MissingEnvVarError,
    models::{bar::Bar, request::{AggregatesRequest, RequestError}},
};

/// Fetches an ordered sequence of bars for a request.
#[async_trait]
pub trait AggregatesSource: Send + Sync {
    /// Returns the bars covering `request`, oldest first.
    ///
    /// An empty vector is a valid answer (nothing traded in the range).
    async fn fetch_aggregates(&self, request: &AggregatesRequest) -> Result<Vec<Bar>, SourceError>;
}

/// Errors that can occur while fetching bars.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network failure, timeout or undecodable HTTP body.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with an error payload.
    #[error("API error: {0}")]
    Api(String),

    /// The request was rejected before being sent.
    #[error("Invalid request: {0}")]
    Validation(#[from] RequestError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed bar data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVarError),
}
