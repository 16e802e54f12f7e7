//! Configuration types for the OpenSearchClient.

/// Default OpenSearch URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default number of hits requested per page when listing an index.
pub const DEFAULT_LIST_PAGE_SIZE: usize = 1000;

/// Configuration for the OpenSearchClient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSearchConfig {
    /// The OpenSearch server URL (e.g., "http://localhost:9200").
    pub url: String,
    /// Number of hits fetched per search request by `list_all`.
    /// Must stay below the index's `max_result_window` (10000 by default).
    pub list_page_size: usize,
}

impl Default for OpenSearchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPENSEARCH_URL.to_string(),
            list_page_size: DEFAULT_LIST_PAGE_SIZE,
        }
    }
}

impl OpenSearchConfig {
    /// Create a config for the given URL with default settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the page size used when listing an index. Zero is raised to one.
    pub fn with_list_page_size(mut self, list_page_size: usize) -> Self {
        self.list_page_size = list_page_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenSearchConfig::default();

        assert_eq!(config.url, "http://localhost:9200");
        assert_eq!(config.list_page_size, 1000);
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let config = OpenSearchConfig::new("http://search:9200").with_list_page_size(0);

        assert_eq!(config.url, "http://search:9200");
        assert_eq!(config.list_page_size, 1);
    }
}
