//! Feed fetcher — the bounded list of recent guestbook messages.
//!
//! DESIGN
//! ======
//! One `GetAllMessages` query per call, no retries, no caching. The backend
//! answers with relay-style `edges { node }` wrappers; `unwrap_edges` is the
//! pure transformation that flattens them into a plain `Vec<Message>`.
//! Ordering is whatever the backend returns.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::graphql::GraphQlBackend;
use crate::graphql::types::FetchError;

/// Number of messages shown on the page.
pub const FEED_PAGE_SIZE: NonZeroU32 = NonZeroU32::new(10).unwrap();

pub const GET_ALL_MESSAGES: &str = r"query GetAllMessages($first: Int!) {
  messageCollection(first: $first) {
    edges {
      node {
        id
        author
        message
        createdAt
      }
    }
  }
}";

// =============================================================================
// TYPES
// =============================================================================

/// A guestbook entry as stored by the backend. Never modified locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub author: String,
    pub message: String,
    /// Backend timestamp, RFC 3339 expected. Display only.
    pub created_at: String,
}

/// Ordered, page-bounded list of messages.
pub type Feed = Vec<Message>;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedData {
    message_collection: MessageCollection,
}

#[derive(Deserialize)]
struct MessageCollection {
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct Edge {
    node: Message,
}

// =============================================================================
// FETCH
// =============================================================================

/// Fetch up to `limit` of the most recent messages.
///
/// # Errors
///
/// Propagates transport errors; returns [`FetchError::MalformedResponse`] if
/// the payload does not have the `messageCollection.edges[].node` shape.
pub async fn fetch_feed(backend: &dyn GraphQlBackend, limit: NonZeroU32) -> Result<Feed, FetchError> {
    let variables = serde_json::json!({ "first": limit.get() });
    let data = backend.post_graphql(GET_ALL_MESSAGES, variables).await?;
    let feed = unwrap_edges(data, limit)?;

    info!(limit = limit.get(), count = feed.len(), "feed: fetched");
    Ok(feed)
}

/// Flatten `messageCollection.edges[].node` into a feed of at most `limit`
/// messages, preserving backend order.
///
/// # Errors
///
/// Returns [`FetchError::MalformedResponse`] if any expected field is missing.
pub fn unwrap_edges(data: serde_json::Value, limit: NonZeroU32) -> Result<Feed, FetchError> {
    let parsed: FeedData =
        serde_json::from_value(data).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    let limit = usize::try_from(limit.get()).unwrap_or(usize::MAX);

    Ok(parsed
        .message_collection
        .edges
        .into_iter()
        .take(limit)
        .map(|edge| edge.node)
        .collect())
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
