//! Settings read from the environment.

use std::env;
use std::str::FromStr;

use search_store_repository::config::{DEFAULT_LIST_PAGE_SIZE, DEFAULT_OPENSEARCH_URL};
use search_store_repository::OpenSearchConfig;

use crate::StoreError;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, one line per event.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(StoreError::config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Runtime settings for the search store binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// OpenSearch server URL.
    pub opensearch_url: String,
    /// Hits requested per page when listing an index.
    pub list_page_size: usize,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opensearch_url: DEFAULT_OPENSEARCH_URL.to_string(),
            list_page_size: DEFAULT_LIST_PAGE_SIZE,
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `SEARCH_STORE_PAGE_SIZE`: hits per page when listing (default: 1000)
    /// - `LOG_FORMAT`: `pretty` or `json` (default: pretty)
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(url) = lookup("OPENSEARCH_URL") {
            settings.opensearch_url = url;
        }
        if let Some(page_size) = lookup("SEARCH_STORE_PAGE_SIZE") {
            settings.list_page_size = parse_page_size(&page_size)?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            settings.log_format = format.parse()?;
        }

        Ok(settings)
    }

    /// The OpenSearch client configuration these settings describe.
    pub fn opensearch_config(&self) -> OpenSearchConfig {
        OpenSearchConfig::new(&self.opensearch_url).with_list_page_size(self.list_page_size)
    }
}

fn parse_page_size(value: &str) -> Result<usize, StoreError> {
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(StoreError::config(format!(
            "SEARCH_STORE_PAGE_SIZE must be a positive integer, got {:?}",
            value
        ))),
    }
}
