//! HTTP gateway to the Social Saver backend.
//!
//! The dashboard core talks to the backend through the `ContentGateway`
//! trait; `ApiClient` is the reqwest implementation of it. Tests substitute
//! an in-memory gateway.
//!
//! Every call collapses into a single "request failed" error kind: the core
//! does not distinguish an unreachable server from a bad status or a
//! malformed payload, and it never retries.

mod client;

use crate::types::ContentItem;
use async_trait::async_trait;

pub use client::ApiClient;

/// Common error type for all backend calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ApiError {
    /// True when the backend answered 404 for the addressed resource.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The slice of the backend the Content Browser depends on.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Liveness probe, no payload.
    async fn health(&self) -> ApiResult<()>;

    /// Identity tokens the server knows to have at least one stored item.
    async fn list_users(&self) -> ApiResult<Vec<String>>;

    /// One page of a user's saved content, newest first.
    async fn list_content(&self, user_id: &str, skip: u32, limit: u32)
    -> ApiResult<Vec<ContentItem>>;

    /// Free-text search, optionally narrowed by category and/or platform.
    /// Matching semantics are server-defined.
    async fn search(
        &self,
        user_id: &str,
        query: &str,
        category: Option<&str>,
        platform: Option<&str>,
    ) -> ApiResult<Vec<ContentItem>>;

    /// Distinct category values present in the user's collection.
    async fn list_categories(&self, user_id: &str) -> ApiResult<Vec<String>>;

    /// Distinct platform values present in the user's collection.
    async fn list_platforms(&self, user_id: &str) -> ApiResult<Vec<String>>;

    /// Soft-delete one item.
    async fn archive(&self, user_id: &str, content_id: i64) -> ApiResult<()>;
}
