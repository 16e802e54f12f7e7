//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::config::DEFAULT_LIST_PAGE_SIZE;
use crate::errors::SearchEngineError;
use crate::types::{IndexName, SearchPage};

/// Abstract interface for search engine operations.
///
/// Methods work on raw JSON; typing documents is left to the generic
/// functions in [`crate::documents`]. Every method maps to a single request
/// against the engine and reports any failure, including a non-success
/// status code, as a `SearchEngineError`.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Store `body` under `id`, replacing any existing document.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index
    /// * `id` - The document identifier
    /// * `body` - The full document
    async fn index_document(
        &self,
        index: &IndexName,
        id: &str,
        body: Value,
    ) -> Result<(), SearchEngineError>;

    /// Merge `partial` into the existing document stored under `id`.
    ///
    /// The document must already exist in the index.
    async fn update_document(
        &self,
        index: &IndexName,
        id: &str,
        partial: Value,
    ) -> Result<(), SearchEngineError>;

    /// Run a match-all search and return the hits from `from` to `from + size`.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchPage)` - The page of `_source` values and the total hit count
    /// * `Err(SearchEngineError)` - If the search fails or the index doesn't exist
    async fn search_all(
        &self,
        index: &IndexName,
        from: usize,
        size: usize,
    ) -> Result<SearchPage, SearchEngineError>;

    /// Delete the document stored under `id`.
    ///
    /// A missing document is reported as an error.
    async fn delete_document(&self, index: &IndexName, id: &str) -> Result<(), SearchEngineError>;

    /// Delete whole indexes, in one request.
    async fn delete_indexes(&self, indexes: &[IndexName]) -> Result<(), SearchEngineError>;

    /// Make recent writes to the given indexes visible to search.
    async fn refresh(&self, indexes: &[IndexName]) -> Result<(), SearchEngineError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine is unhealthy
    /// * `Err(SearchEngineError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchEngineError>;

    /// Number of hits to request per page when listing a whole index.
    fn list_page_size(&self) -> usize {
        DEFAULT_LIST_PAGE_SIZE
    }
}
