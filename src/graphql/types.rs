//! GraphQL wire types and transport errors.
//!
//! The backend answers every operation with the standard `{ data, errors }`
//! envelope. [`GraphQlResponse::into_data`] collapses that envelope into a
//! single `Result` so callers never poke at loosely typed JSON.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Coarse classification of a [`FetchError`], for callers that only need to
/// branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorReason {
    Unreachable,
    BackendRejected,
    MalformedResponse,
}

/// Errors produced by a single round trip to the GraphQL backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, or the body could not be read.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// Non-success HTTP status, or a GraphQL `errors` array.
    #[error("backend rejected request: status {status}: {body}")]
    BackendRejected { status: u16, body: String },

    /// Success status but the body is missing the expected structure.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    #[must_use]
    pub fn reason(&self) -> FetchErrorReason {
        match self {
            Self::Unreachable(_) => FetchErrorReason::Unreachable,
            Self::BackendRejected { .. } => FetchErrorReason::BackendRejected,
            Self::MalformedResponse(_) => FetchErrorReason::MalformedResponse,
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub(crate) query: &'a str,
    pub(crate) variables: &'a serde_json::Value,
}

/// A single entry of the GraphQL `errors` array. Only the message is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

/// The `{ data, errors }` response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Resolve the envelope into its `data` payload.
    ///
    /// A non-empty `errors` array wins over any partial `data`.
    ///
    /// # Errors
    ///
    /// [`FetchError::BackendRejected`] when the backend reported errors,
    /// [`FetchError::MalformedResponse`] when `data` is absent or null.
    pub fn into_data(self, status: u16) -> Result<serde_json::Value, FetchError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let body = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FetchError::BackendRejected { status, body });
        }

        match self.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(FetchError::MalformedResponse("response has no data field".into())),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
