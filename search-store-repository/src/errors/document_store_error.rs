//! Document store error types.
//!
//! Every failure surfaced by the document operations names the operation and
//! the identifiers it was working on, followed by the underlying cause.

use std::fmt;

use thiserror::Error;

use crate::errors::SearchEngineError;
use crate::types::IndexName;

/// Errors returned by the generic document operations.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Indexing a document failed.
    #[error("while indexing {index}:{id}: {source}")]
    Index {
        index: IndexName,
        id: String,
        #[source]
        source: SearchEngineError,
    },

    /// Partially updating a document failed.
    #[error("while updating {index}:{id}: {source}")]
    Update {
        index: IndexName,
        id: String,
        #[source]
        source: SearchEngineError,
    },

    /// Fetching the documents of an index failed.
    #[error("while listing {index}: {source}")]
    List {
        index: IndexName,
        #[source]
        source: SearchEngineError,
    },

    /// A search hit could not be decoded into the requested document type.
    #[error("while decoding search result from {index}: {source}")]
    Decode {
        index: IndexName,
        #[source]
        source: serde_json::Error,
    },

    /// Deleting a document failed.
    #[error("while deleting {index}:{id}: {source}")]
    Delete {
        index: IndexName,
        id: String,
        #[source]
        source: SearchEngineError,
    },

    /// Deleting one or more indexes failed.
    #[error("while dropping indexes {}: {source}", IndexList(.indexes))]
    Drop {
        indexes: Vec<IndexName>,
        #[source]
        source: SearchEngineError,
    },

    /// Refreshing one or more indexes failed.
    #[error("while refreshing indexes {}: {source}", IndexList(.indexes))]
    Refresh {
        indexes: Vec<IndexName>,
        #[source]
        source: SearchEngineError,
    },
}

impl DocumentStoreError {
    /// The index the failed operation targeted, if it targeted exactly one.
    pub fn index_name(&self) -> Option<&IndexName> {
        match self {
            Self::Index { index, .. }
            | Self::Update { index, .. }
            | Self::List { index, .. }
            | Self::Decode { index, .. }
            | Self::Delete { index, .. } => Some(index),
            Self::Drop { .. } | Self::Refresh { .. } => None,
        }
    }

    /// The underlying search engine error, if the failure came from the engine.
    pub fn engine_error(&self) -> Option<&SearchEngineError> {
        match self {
            Self::Index { source, .. }
            | Self::Update { source, .. }
            | Self::List { source, .. }
            | Self::Delete { source, .. }
            | Self::Drop { source, .. }
            | Self::Refresh { source, .. } => Some(source),
            Self::Decode { .. } => None,
        }
    }

    /// Whether the engine reported the target as missing.
    pub fn is_not_found(&self) -> bool {
        self.engine_error()
            .is_some_and(SearchEngineError::is_not_found)
    }
}

/// Renders index names as `[a, b]`.
struct IndexList<'a>(&'a [IndexName]);

impl fmt::Display for IndexList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", name)?;
        }
        f.write_str("]")
    }
}
