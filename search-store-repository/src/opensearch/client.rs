//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use std::fmt;

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesDeleteParts, IndicesRefreshParts},
    DeleteParts, IndexParts, OpenSearch, SearchParts, UpdateParts,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::OpenSearchConfig;
use crate::errors::SearchEngineError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::queries::{match_all_query, parse_search_page, partial_update_body};
use crate::types::{IndexName, SearchPage};

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// use search_store_repository::{documents, IndexName, OpenSearchClient};
///
/// let client = OpenSearchClient::new("http://localhost:9200").await?;
/// let books = IndexName::from("books");
///
/// documents::index(&client, "1", &books, &Book { title: "Dune".into() }).await?;
/// let all: Vec<Book> = documents::list_all(&client, &books).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    config: OpenSearchConfig,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchEngineError)` - If connection setup fails
    pub async fn new(url: &str) -> Result<Self, SearchEngineError> {
        Self::with_config(OpenSearchConfig::new(url)).await
    }

    /// Create a new OpenSearch client from a full configuration.
    pub async fn with_config(config: OpenSearchConfig) -> Result<Self, SearchEngineError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| SearchEngineError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchEngineError::connection(e.to_string()))?;

        info!(
            url = %config.url,
            list_page_size = config.list_page_size,
            "Created OpenSearch client"
        );

        Ok(Self::from_client(OpenSearch::new(transport), config))
    }

    /// Wrap an already constructed OpenSearch client.
    ///
    /// Use this when the caller owns transport concerns such as
    /// authentication, TLS, or connection pooling.
    pub fn from_client(client: OpenSearch, config: OpenSearchConfig) -> Self {
        Self { client, config }
    }

    /// The underlying OpenSearch client.
    pub fn inner(&self) -> &OpenSearch {
        &self.client
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &OpenSearchConfig {
        &self.config
    }
}

/// Turn a non-success response into a `SearchEngineError::StatusError`.
async fn ensure_success(response: Response) -> Result<Response, SearchEngineError> {
    let status = response.status_code();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = body_or_read_error(response.text().await);
    error!(status = %status, body = %error_body, "OpenSearch request failed");
    Err(SearchEngineError::status(status.as_u16(), error_body))
}

/// The response body, or a note saying why it could not be read.
fn body_or_read_error<E: fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<failed to read response body: {}>", e))
}

fn index_names(indexes: &[IndexName]) -> Vec<&str> {
    indexes.iter().map(IndexName::as_str).collect()
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self, body))]
    async fn index_document(
        &self,
        index: &IndexName,
        id: &str,
        body: Value,
    ) -> Result<(), SearchEngineError> {
        let response = self
            .client
            .index(IndexParts::IndexId(index.as_str(), id))
            .body(body)
            .send()
            .await?;
        ensure_success(response).await?;

        debug!("Document indexed");
        Ok(())
    }

    // API reference: https://docs.opensearch.org/latest/api-reference/document-apis/update-document/
    #[instrument(skip(self, partial))]
    async fn update_document(
        &self,
        index: &IndexName,
        id: &str,
        partial: Value,
    ) -> Result<(), SearchEngineError> {
        let response = self
            .client
            .update(UpdateParts::IndexId(index.as_str(), id))
            .body(partial_update_body(partial))
            .send()
            .await?;
        ensure_success(response).await?;

        debug!("Document updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_all(
        &self,
        index: &IndexName,
        from: usize,
        size: usize,
    ) -> Result<SearchPage, SearchEngineError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index.as_str()]))
            .body(match_all_query(from, size))
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body: Value = response.json().await?;
        let page = parse_search_page(&body)?;

        debug!(total = page.total, hits = page.sources.len(), "Search page fetched");
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, index: &IndexName, id: &str) -> Result<(), SearchEngineError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(index.as_str(), id))
            .send()
            .await?;
        ensure_success(response).await?;

        debug!("Document deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_indexes(&self, indexes: &[IndexName]) -> Result<(), SearchEngineError> {
        let names = index_names(indexes);
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&names))
            .send()
            .await?;
        ensure_success(response).await?;

        info!(indexes = ?names, "Indexes dropped");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn refresh(&self, indexes: &[IndexName]) -> Result<(), SearchEngineError> {
        let names = index_names(indexes);
        let response = self
            .client
            .indices()
            .refresh(IndicesRefreshParts::Index(&names))
            .send()
            .await?;
        ensure_success(response).await?;

        debug!(indexes = ?names, "Indexes refreshed");
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, SearchEngineError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body: Value = response.json().await?;
        let status = body.get("status").and_then(Value::as_str).unwrap_or("red");

        debug!(status = %status, "Cluster health checked");
        Ok(status != "red")
    }

    fn list_page_size(&self) -> usize {
        self.config.list_page_size
    }
}
