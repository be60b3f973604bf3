//! Content catalog integration.
//!
//! This module defines the [`ContentCatalog`] trait used by the mood resolver
//! and the HTTP API, plus the TMDB-backed implementation.

mod genres;
mod tmdb;
mod types;

pub use genres::{genre_name, genres_for, Genre, MOVIE_GENRES, TV_GENRES};
pub use tmdb::TmdbClient;
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the content catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Query did not complete within its time bound.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing or rejected API key).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Read-only access to a movie/TV metadata source.
///
/// Every list operation returns an empty vector for zero results and reserves
/// `Err` for transport, status and payload failures.
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// Titles of one category carrying all of `genre_ids`, most popular first.
    async fn discover(
        &self,
        media_type: MediaType,
        genre_ids: &[u32],
    ) -> Result<Vec<MediaItem>, CatalogError>;

    /// Free-text search across movies and TV (people are filtered out).
    async fn search(&self, query: &str, page: u32) -> Result<Vec<MediaItem>, CatalogError>;

    /// Trending titles for a category filter and time window.
    async fn trending(
        &self,
        filter: MediaFilter,
        window: TimeWindow,
    ) -> Result<Vec<MediaItem>, CatalogError>;

    /// Full details for one title.
    async fn details(&self, media_type: MediaType, id: u64)
        -> Result<MediaDetails, CatalogError>;

    /// Titles recommended from one title, tagged with the same media type.
    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Vec<MediaItem>, CatalogError>;
}
