//! GraphQL transport — the single POST helper shared by the feed and
//! submission paths.
//!
//! DESIGN
//! ======
//! `GraphQlBackend` is the seam: handlers depend on the trait, production
//! wires in `GraphQlClient` (reqwest), tests wire in an in-memory mock.
//! User input only ever travels in `variables`, never in the query text.
//! Response parsing lives in the pure `parse_response` for testability.

pub mod types;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::config::{ConfigError, GuestbookConfig};
use types::{FetchError, GraphQlRequest, GraphQlResponse};

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Async transport to the GraphQL backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait GraphQlBackend: Send + Sync {
    /// Send one operation and return the `data` field of the response.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the backend is unreachable, answers with a
    /// non-success status or GraphQL errors, or returns a body without `data`.
    async fn post_graphql(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value, FetchError>;
}

// =============================================================================
// CLIENT
// =============================================================================

/// reqwest-backed [`GraphQlBackend`] bound to one endpoint.
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    /// Build a client for the configured endpoint and timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &GuestbookConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.graphql_url.clone() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl GraphQlBackend for GraphQlClient {
    async fn post_graphql(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value, FetchError> {
        let body = GraphQlRequest { query, variables: &variables };

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The body is diagnostic only; a failed read must not mask the status.
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::BackendRejected { status: status.as_u16(), body });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        parse_response(status.as_u16(), &text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(status: u16, json: &str) -> Result<serde_json::Value, FetchError> {
    let envelope: GraphQlResponse =
        serde_json::from_str(json).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    envelope.into_data(status)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
