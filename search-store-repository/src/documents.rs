//! Generic document operations.
//!
//! Each function is a single pass-through to a `SearchEngineClient`, typed
//! over the caller's document type. Failures are wrapped in a
//! `DocumentStoreError` naming the operation, the index, and the document id.
//! Nothing is retried: the first failure is returned.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::{DocumentStoreError, SearchEngineError};
use crate::interfaces::SearchEngineClient;
use crate::types::IndexName;

const NO_INDEXES_GIVEN: &str = "no indexes given";

/// Store `document` under `id` in `index`, replacing any previous version.
#[instrument(skip(client, document))]
pub async fn index<C, T>(
    client: &C,
    id: &str,
    index: &IndexName,
    document: &T,
) -> Result<(), DocumentStoreError>
where
    C: SearchEngineClient + ?Sized,
    T: Serialize + ?Sized,
{
    let wrap = |source: SearchEngineError| DocumentStoreError::Index {
        index: index.clone(),
        id: id.to_string(),
        source,
    };

    let body = serde_json::to_value(document).map_err(|e| wrap(e.into()))?;
    client.index_document(index, id, body).await.map_err(wrap)
}

/// Merge the fields of `document` into the document stored under `id`.
///
/// Fields absent from `document` keep their stored values. The document must
/// already exist.
#[instrument(skip(client, document))]
pub async fn update<C, T>(
    client: &C,
    id: &str,
    index: &IndexName,
    document: &T,
) -> Result<(), DocumentStoreError>
where
    C: SearchEngineClient + ?Sized,
    T: Serialize + ?Sized,
{
    let wrap = |source: SearchEngineError| DocumentStoreError::Update {
        index: index.clone(),
        id: id.to_string(),
        source,
    };

    let partial = serde_json::to_value(document).map_err(|e| wrap(e.into()))?;
    client.update_document(index, id, partial).await.map_err(wrap)
}

/// Fetch every document in `index`, decoded as `T`.
///
/// Pages through a match-all search `client.list_page_size()` hits at a time
/// until the reported total is reached. A hit that does not decode as `T`
/// aborts the listing.
#[instrument(skip(client))]
pub async fn list_all<C, T>(client: &C, index: &IndexName) -> Result<Vec<T>, DocumentStoreError>
where
    C: SearchEngineClient + ?Sized,
    T: DeserializeOwned,
{
    let page_size = client.list_page_size().max(1);
    let mut documents: Vec<T> = Vec::new();

    loop {
        let page = client
            .search_all(index, documents.len(), page_size)
            .await
            .map_err(|source| DocumentStoreError::List {
                index: index.clone(),
                source,
            })?;

        let exhausted = page.sources.len() < page_size;
        for hit in page.sources {
            let document =
                serde_json::from_value(hit).map_err(|source| DocumentStoreError::Decode {
                    index: index.clone(),
                    source,
                })?;
            documents.push(document);
        }

        if exhausted || documents.len() as u64 >= page.total {
            break;
        }
    }

    debug!(count = documents.len(), "Listed documents");
    Ok(documents)
}

/// Remove the document stored under `id` from `index`.
///
/// Deleting a document that does not exist is an error.
#[instrument(skip(client))]
pub async fn delete<C>(client: &C, id: &str, index: &IndexName) -> Result<(), DocumentStoreError>
where
    C: SearchEngineClient + ?Sized,
{
    client
        .delete_document(index, id)
        .await
        .map_err(|source| DocumentStoreError::Delete {
            index: index.clone(),
            id: id.to_string(),
            source,
        })
}

/// Delete one or more whole indexes with a single request.
///
/// Subsequent operations against a dropped index fail until it is recreated.
/// An empty `indexes` slice is rejected without contacting the engine.
#[instrument(skip(client))]
pub async fn drop_indexes<C>(client: &C, indexes: &[IndexName]) -> Result<(), DocumentStoreError>
where
    C: SearchEngineClient + ?Sized,
{
    if indexes.is_empty() {
        return Err(DocumentStoreError::Drop {
            indexes: Vec::new(),
            source: SearchEngineError::validation(NO_INDEXES_GIVEN),
        });
    }

    client
        .delete_indexes(indexes)
        .await
        .map_err(|source| DocumentStoreError::Drop {
            indexes: indexes.to_vec(),
            source,
        })
}

/// Make recent writes to `indexes` visible to [`list_all`].
///
/// An empty `indexes` slice is rejected; the engine would read it as every index.
#[instrument(skip(client))]
pub async fn refresh<C>(client: &C, indexes: &[IndexName]) -> Result<(), DocumentStoreError>
where
    C: SearchEngineClient + ?Sized,
{
    if indexes.is_empty() {
        return Err(DocumentStoreError::Refresh {
            indexes: Vec::new(),
            source: SearchEngineError::validation(NO_INDEXES_GIVEN),
        });
    }

    client
        .refresh(indexes)
        .await
        .map_err(|source| DocumentStoreError::Refresh {
            indexes: indexes.to_vec(),
            source,
        })
}
