//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend.

mod client;
mod queries;

pub use client::OpenSearchClient;
pub use queries::{match_all_query, parse_search_page, partial_update_body};
