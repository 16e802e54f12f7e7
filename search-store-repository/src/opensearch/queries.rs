//! OpenSearch request bodies and response parsing.
//!
//! Every request this crate sends is either a match-all search or a partial
//! document update; both bodies, and the parsing of search responses, live
//! here so they can be tested without a cluster.

use serde_json::{json, Value};

use crate::errors::SearchEngineError;
use crate::types::SearchPage;

/// Build a match-all search body returning hits `from..from + size`.
///
/// Hits are sorted by `_doc` so consecutive pages do not overlap, and the
/// total hit count is tracked exactly so callers know when to stop paging.
pub fn match_all_query(from: usize, size: usize) -> Value {
    json!({
        "query": {
            "match_all": {}
        },
        "from": from,
        "size": size,
        "sort": ["_doc"],
        "track_total_hits": true
    })
}

/// Build the body of a partial update merging `doc` into the stored document.
pub fn partial_update_body(doc: Value) -> Value {
    json!({ "doc": doc })
}

/// Parse a search response into its total hit count and the `_source` of each hit.
///
/// Accepts both the object form of `hits.total` (`{"value": n, ...}`) and
/// the bare number older engines return.
pub fn parse_search_page(response: &Value) -> Result<SearchPage, SearchEngineError> {
    let hits = response
        .get("hits")
        .ok_or_else(|| SearchEngineError::parse("search response has no hits object"))?;

    let raw_hits = hits
        .get("hits")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchEngineError::parse("search response has no hits array"))?;

    let sources = raw_hits
        .iter()
        .enumerate()
        .map(|(position, hit)| {
            hit.get("_source").cloned().ok_or_else(|| {
                let id = hit.get("_id").and_then(Value::as_str).unwrap_or("?");
                SearchEngineError::parse(format!(
                    "hit {} (id {}) has no _source",
                    position, id
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total = match hits.get("total") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(total) => total.get("value").and_then(Value::as_u64),
        None => None,
    }
    .unwrap_or(sources.len() as u64);

    Ok(SearchPage { total, sources })
}
