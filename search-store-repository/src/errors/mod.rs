//! Error types for the search store repository.

mod document_store_error;
mod search_engine_error;

pub use document_store_error::DocumentStoreError;
pub use search_engine_error::SearchEngineError;
