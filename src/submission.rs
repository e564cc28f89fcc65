//! Submission handler — create a message, then refresh the feed.
//!
//! DESIGN
//! ======
//! Two sequential backend calls, never parallel and never transactional:
//! the `AddNewMessage` mutation, then `fetch_feed` so the page reflects
//! post-mutation state. A concurrent writer may land in between; the
//! returned feed is a best-effort snapshot.
//!
//! The mutation result is checked. Under `SubmitPolicy::Strict` a failed
//! mutation short-circuits with `SubmissionError::Rejected`; under
//! `SubmitPolicy::Permissive` it is logged and the feed is fetched anyway.
//! There is no idempotency key, so a retried submission creates a duplicate.

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::SubmitPolicy;
use crate::feed::{self, FEED_PAGE_SIZE, Feed};
use crate::graphql::GraphQlBackend;
use crate::graphql::types::FetchError;

pub const ADD_NEW_MESSAGE: &str = r"mutation AddNewMessage($author: String!, $message: String!) {
  messageCreate(input: { author: $author, message: $message }) {
    message {
      id
    }
  }
}";

// =============================================================================
// TYPES
// =============================================================================

/// Decoded guestbook form. Unknown fields are ignored; empty strings are
/// forwarded as-is and left for the backend to judge.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitForm {
    pub author: String,
    pub message: String,
}

/// Acknowledgement of a successful `messageCreate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMessage {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The create-message mutation failed.
    #[error("message was not created: {0}")]
    Rejected(#[source] FetchError),

    /// The feed refresh after the mutation failed.
    #[error("feed refresh failed: {0}")]
    Feed(#[source] FetchError),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateData {
    message_create: CreatePayload,
}

#[derive(Deserialize)]
struct CreatePayload {
    message: CreatedNode,
}

#[derive(Deserialize)]
struct CreatedNode {
    id: String,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Send the `AddNewMessage` mutation for one form submission.
///
/// # Errors
///
/// Propagates transport errors; returns [`FetchError::MalformedResponse`] if
/// the payload has no `messageCreate.message.id`.
pub async fn create_message(backend: &dyn GraphQlBackend, form: &SubmitForm) -> Result<CreatedMessage, FetchError> {
    let variables = serde_json::json!({ "author": form.author, "message": form.message });
    let data = backend.post_graphql(ADD_NEW_MESSAGE, variables).await?;
    parse_created(data)
}

fn parse_created(data: serde_json::Value) -> Result<CreatedMessage, FetchError> {
    let parsed: CreateData =
        serde_json::from_value(data).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    Ok(CreatedMessage { id: parsed.message_create.message.id })
}

/// Create a message from `form`, then return a freshly fetched feed.
///
/// # Errors
///
/// [`SubmissionError::Rejected`] if the mutation fails under
/// [`SubmitPolicy::Strict`]; [`SubmissionError::Feed`] if the refresh fails.
pub async fn submit_message(
    backend: &dyn GraphQlBackend,
    policy: SubmitPolicy,
    form: &SubmitForm,
) -> Result<Feed, SubmissionError> {
    match create_message(backend, form).await {
        Ok(created) => {
            info!(id = %created.id, author_len = form.author.len(), message_len = form.message.len(), "submission: message created");
        }
        Err(e) => match policy {
            SubmitPolicy::Strict => {
                warn!(error = %e, reason = ?e.reason(), "submission: mutation failed");
                return Err(SubmissionError::Rejected(e));
            }
            SubmitPolicy::Permissive => {
                warn!(error = %e, reason = ?e.reason(), "submission: mutation failed; refreshing feed anyway");
            }
        },
    }

    feed::fetch_feed(backend, FEED_PAGE_SIZE)
        .await
        .map_err(SubmissionError::Feed)
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
