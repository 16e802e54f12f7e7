//! # Search Store
//!
//! Configuration, logging, and command handling for the `search-store`
//! binary, which drives the generic document operations of
//! `search-store-repository` against an OpenSearch cluster.

pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{Cli, Command};
pub use config::{Dependencies, Settings};

use thiserror::Error;

/// Errors that can occur while configuring or running a command.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A document operation failed.
    #[error(transparent)]
    DocumentError(#[from] search_store_repository::DocumentStoreError),

    /// A document argument was not valid JSON.
    #[error("Invalid document: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The command was interrupted before it completed.
    #[error("Interrupted")]
    Interrupted,
}

impl StoreError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
