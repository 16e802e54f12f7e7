//! Dependency initialization and wiring for the search store binary.

use tracing::info;

use crate::config::Settings;
use crate::StoreError;
use search_store_repository::{OpenSearchClient, SearchEngineClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The connected, health-checked search client.
    pub client: OpenSearchClient,
}

impl Dependencies {
    /// Initialize all dependencies from settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(StoreError)` - If the client cannot be built or the cluster is unhealthy
    pub async fn new(settings: &Settings) -> Result<Self, StoreError> {
        info!(
            opensearch_url = %settings.opensearch_url,
            list_page_size = settings.list_page_size,
            "Initializing dependencies"
        );

        let client = OpenSearchClient::with_config(settings.opensearch_config())
            .await
            .map_err(|e| StoreError::config(format!("Failed to create OpenSearch client: {}", e)))?;

        // Verify OpenSearch is reachable
        let healthy = client
            .health_check()
            .await
            .map_err(|e| StoreError::config(format!("OpenSearch health check failed: {}", e)))?;

        if !healthy {
            return Err(StoreError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");

        Ok(Self { client })
    }
}
