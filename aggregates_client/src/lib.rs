//! Client-side boundary for the aggregates service.
//!
//! [`models`] holds the plain value records exchanged with the service
//! ([`Bar`](models::bar::Bar), [`AggregatesRequest`](models::request::AggregatesRequest)),
//! and [`sources`] defines the [`AggregatesSource`](sources::AggregatesSource) trait
//! with a REST and a JSON-file implementation.

pub mod env;
pub mod models;
pub mod sources;
