//! Interface definitions for the search engine client.
//!
//! This module defines the abstract `SearchEngineClient` trait that the
//! document operations are written against, allowing for swappable search
//! backend implementations.

mod search_engine_client;

pub use search_engine_client::SearchEngineClient;
