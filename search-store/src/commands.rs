//! Command line interface.
//!
//! Each subcommand maps onto one document operation, with documents handled
//! as raw JSON values.

use std::io::{Read, Write};

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::config::Settings;
use crate::StoreError;
use search_store_repository::{documents, IndexName, SearchEngineClient};

/// Document argument value that means "read the document from stdin".
const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "search-store")]
#[command(about = "Index, update, list, delete, and drop documents in OpenSearch", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// OpenSearch URL (overrides OPENSEARCH_URL)
    #[arg(long, global = true)]
    pub opensearch_url: Option<String>,

    /// Hits fetched per request when listing (overrides SEARCH_STORE_PAGE_SIZE)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Log format, pretty or json (overrides LOG_FORMAT)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a document, replacing any existing version
    Index {
        /// Target index
        index: String,
        /// JSON document, or "-" to read it from stdin
        document: String,
        /// Document id (a random UUID when omitted)
        #[arg(long)]
        id: Option<String>,
    },
    /// Merge fields into an existing document
    Update {
        /// Target index
        index: String,
        /// Document id
        id: String,
        /// JSON object with the fields to change, or "-" to read it from stdin
        document: String,
    },
    /// Print every document of an index, one JSON object per line
    List {
        /// Index to list
        index: String,
    },
    /// Delete a document
    Delete {
        /// Target index
        index: String,
        /// Document id
        id: String,
    },
    /// Delete whole indexes
    Drop {
        /// Indexes to delete
        #[arg(required = true)]
        indexes: Vec<String>,
    },
    /// Make recent writes visible to list
    Refresh {
        /// Indexes to refresh
        #[arg(required = true)]
        indexes: Vec<String>,
    },
}

impl Cli {
    /// Apply command line overrides on top of `settings`.
    pub fn apply(&self, mut settings: Settings) -> Result<Settings, StoreError> {
        if let Some(url) = &self.opensearch_url {
            settings.opensearch_url = url.clone();
        }
        if let Some(page_size) = self.page_size {
            if page_size == 0 {
                return Err(StoreError::config("--page-size must be positive"));
            }
            settings.list_page_size = page_size;
        }
        if let Some(format) = &self.log_format {
            settings.log_format = format.parse()?;
        }
        Ok(settings)
    }
}

/// Run `command` against `client`.
///
/// `input` is read only when a document argument is `-`; results are
/// written to `out`.
pub async fn run<C, R, W>(
    command: Command,
    client: &C,
    input: R,
    out: &mut W,
) -> Result<(), StoreError>
where
    C: SearchEngineClient + ?Sized,
    R: Read,
    W: Write,
{
    match command {
        Command::Index {
            index,
            document,
            id,
        } => {
            let index = IndexName::from(index);
            let document = read_document(&document, input)?;
            let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

            documents::index(client, &id, &index, &document).await?;
            info!(index = %index, id = %id, "Document indexed");
            writeln!(out, "{}", id)?;
        }
        Command::Update {
            index,
            id,
            document,
        } => {
            let index = IndexName::from(index);
            let document = read_document(&document, input)?;
            if !document.is_object() {
                return Err(StoreError::config("update expects a JSON object"));
            }

            documents::update(client, &id, &index, &document).await?;
            info!(index = %index, id = %id, "Document updated");
        }
        Command::List { index } => {
            let index = IndexName::from(index);
            let listed: Vec<Value> = documents::list_all(client, &index).await?;

            for document in &listed {
                writeln!(out, "{}", document)?;
            }
            info!(index = %index, count = listed.len(), "Documents listed");
        }
        Command::Delete { index, id } => {
            let index = IndexName::from(index);

            documents::delete(client, &id, &index).await?;
            info!(index = %index, id = %id, "Document deleted");
        }
        Command::Drop { indexes } => {
            let indexes: Vec<IndexName> = indexes.into_iter().map(IndexName::from).collect();

            documents::drop_indexes(client, &indexes).await?;
        }
        Command::Refresh { indexes } => {
            let indexes: Vec<IndexName> = indexes.into_iter().map(IndexName::from).collect();

            documents::refresh(client, &indexes).await?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Parse a document argument, reading it from `input` when it is `-`.
fn read_document<R: Read>(argument: &str, mut input: R) -> Result<Value, StoreError> {
    if argument == STDIN_MARKER {
        let mut buffer = String::new();
        input.read_to_string(&mut buffer)?;
        return Ok(serde_json::from_str(&buffer)?);
    }
    Ok(serde_json::from_str(argument)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use search_store_repository::{SearchEngineError, SearchPage};
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::io::empty;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock client recording documents of a single index.
    #[derive(Default)]
    struct MockClient {
        documents: Arc<Mutex<BTreeMap<String, Value>>>,
        dropped: Arc<Mutex<Vec<IndexName>>>,
    }

    #[async_trait]
    impl SearchEngineClient for MockClient {
        async fn index_document(
            &self,
            _index: &IndexName,
            id: &str,
            body: Value,
        ) -> Result<(), SearchEngineError> {
            self.documents.lock().await.insert(id.to_string(), body);
            Ok(())
        }

        async fn update_document(
            &self,
            _index: &IndexName,
            id: &str,
            partial: Value,
        ) -> Result<(), SearchEngineError> {
            let mut documents = self.documents.lock().await;
            let stored = documents
                .get_mut(id)
                .ok_or_else(|| SearchEngineError::status(404, "document missing"))?;
            if let (Some(stored), Value::Object(fields)) = (stored.as_object_mut(), partial) {
                stored.extend(fields);
            }
            Ok(())
        }

        async fn search_all(
            &self,
            _index: &IndexName,
            from: usize,
            size: usize,
        ) -> Result<SearchPage, SearchEngineError> {
            let documents = self.documents.lock().await;
            Ok(SearchPage {
                total: documents.len() as u64,
                sources: documents.values().skip(from).take(size).cloned().collect(),
            })
        }

        async fn delete_document(
            &self,
            _index: &IndexName,
            id: &str,
        ) -> Result<(), SearchEngineError> {
            self.documents
                .lock()
                .await
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| SearchEngineError::status(404, "document missing"))
        }

        async fn delete_indexes(&self, indexes: &[IndexName]) -> Result<(), SearchEngineError> {
            self.dropped.lock().await.extend_from_slice(indexes);
            Ok(())
        }

        async fn refresh(&self, _indexes: &[IndexName]) -> Result<(), SearchEngineError> {
            Ok(())
        }

        async fn health_check(&self) -> Result<bool, SearchEngineError> {
            Ok(true)
        }
    }

    async fn run_to_string(command: Command, client: &MockClient, input: &str) -> String {
        let mut out = Vec::new();
        run(command, client, input.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_index_command() {
        let cli = Cli::try_parse_from([
            "search-store",
            "index",
            "books",
            r#"{"title":"Dune"}"#,
            "--id",
            "1",
            "--page-size",
            "50",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Index {
                index: "books".to_string(),
                document: r#"{"title":"Dune"}"#.to_string(),
                id: Some("1".to_string()),
            }
        );
        assert_eq!(cli.page_size, Some(50));
    }

    #[test]
    fn test_drop_requires_an_index() {
        assert!(Cli::try_parse_from(["search-store", "drop"]).is_err());
    }

    #[test]
    fn test_cli_overrides_settings() {
        let cli = Cli::try_parse_from([
            "search-store",
            "--opensearch-url",
            "http://search:9200",
            "--log-format",
            "json",
            "list",
            "books",
        ])
        .unwrap();

        let settings = cli.apply(Settings::default()).unwrap();

        assert_eq!(settings.opensearch_url, "http://search:9200");
        assert_eq!(settings.log_format, crate::config::LogFormat::Json);
        assert_eq!(settings.list_page_size, 1000);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let cli =
            Cli::try_parse_from(["search-store", "list", "books", "--page-size", "0"]).unwrap();

        assert!(matches!(
            cli.apply(Settings::default()),
            Err(StoreError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_index_then_list() {
        let client = MockClient::default();

        let id = run_to_string(
            Command::Index {
                index: "books".to_string(),
                document: r#"{"title":"Dune"}"#.to_string(),
                id: Some("1".to_string()),
            },
            &client,
            "",
        )
        .await;
        assert_eq!(id, "1\n");

        let listed = run_to_string(
            Command::List {
                index: "books".to_string(),
            },
            &client,
            "",
        )
        .await;
        assert_eq!(listed, "{\"title\":\"Dune\"}\n");
    }

    #[tokio::test]
    async fn test_index_generates_id_and_reads_stdin() {
        let client = MockClient::default();

        let output = run_to_string(
            Command::Index {
                index: "books".to_string(),
                document: "-".to_string(),
                id: None,
            },
            &client,
            r#"{"title":"Emma"}"#,
        )
        .await;

        let id = output.trim();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(
            client.documents.lock().await.get(id),
            Some(&json!({ "title": "Emma" }))
        );
    }

    #[tokio::test]
    async fn test_update_rejects_non_object() {
        let client = MockClient::default();
        let mut out = Vec::new();

        let result = run(
            Command::Update {
                index: "books".to_string(),
                id: "1".to_string(),
                document: "[1, 2]".to_string(),
            },
            &client,
            empty(),
            &mut out,
        )
        .await;

        assert!(matches!(result, Err(StoreError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_invalid_json_document() {
        let client = MockClient::default();
        let mut out = Vec::new();

        let result = run(
            Command::Index {
                index: "books".to_string(),
                document: "{not json".to_string(),
                id: None,
            },
            &client,
            empty(),
            &mut out,
        )
        .await;

        assert!(matches!(result, Err(StoreError::JsonError(_))));
        assert!(client.documents.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_reports_context() {
        let client = MockClient::default();
        let mut out = Vec::new();

        let err = run(
            Command::Delete {
                index: "books".to_string(),
                id: "ghost".to_string(),
            },
            &client,
            empty(),
            &mut out,
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "while deleting books:ghost: Request failed with status 404: document missing"
        );
    }

    #[tokio::test]
    async fn test_drop_passes_every_index() {
        let client = MockClient::default();

        run_to_string(
            Command::Drop {
                indexes: vec!["books".to_string(), "authors".to_string()],
            },
            &client,
            "",
        )
        .await;

        assert_eq!(
            *client.dropped.lock().await,
            vec![IndexName::from("books"), IndexName::from("authors")]
        );
    }
}
