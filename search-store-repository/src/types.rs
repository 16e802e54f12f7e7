//! Identifier and response types shared by the document operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of a collection of documents in the search engine.
///
/// The name is passed to the engine as-is; it is neither validated nor
/// normalized here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexName(String);

impl IndexName {
    /// Create an index name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw index name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IndexName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IndexName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for IndexName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One page of raw hits from a match-all search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    /// Total number of documents the engine reports as matching.
    pub total: u64,
    /// The `_source` of each hit on this page, in engine order.
    pub sources: Vec<Value>,
}
