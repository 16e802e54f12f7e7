//! # Search Store Repository
//!
//! This crate provides generic document operations (index, update, list,
//! delete, drop) over a search engine. It includes definitions for errors,
//! the client interface the operations are written against, and a concrete
//! implementation for OpenSearch.

pub mod config;
pub mod documents;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use config::OpenSearchConfig;
pub use documents::{delete, drop_indexes, index, list_all, refresh, update};
pub use errors::{DocumentStoreError, SearchEngineError};
pub use interfaces::SearchEngineClient;
pub use opensearch::OpenSearchClient;
pub use types::{IndexName, SearchPage};
