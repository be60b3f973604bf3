//! Mock content catalog for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::media::{
    CatalogError, ContentCatalog, MediaDetails, MediaFilter, MediaItem, MediaType, TimeWindow,
};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCatalogQuery {
    Discover {
        media_type: MediaType,
        genre_ids: Vec<u32>,
    },
    Search {
        query: String,
        page: u32,
    },
    Trending {
        filter: MediaFilter,
        window: TimeWindow,
    },
    Details {
        media_type: MediaType,
        id: u64,
    },
    Recommendations {
        media_type: MediaType,
        id: u64,
    },
}

/// Mock implementation of the ContentCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable discover/search/trending results
/// - Fail or delay individual categories
/// - Track queries for assertions
///
/// # Example
///
/// ```rust,ignore
/// use found404_core::testing::{MockCatalog, fixtures};
///
/// let catalog = MockCatalog::new();
/// catalog.set_discover(MediaType::Tv, fixtures::tv_shows(12)).await;
/// catalog.fail_discover(MediaType::Movie).await;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    /// Discover results by category.
    discover: Arc<RwLock<HashMap<MediaType, Vec<MediaItem>>>>,
    /// Categories whose discover query fails.
    discover_failures: Arc<RwLock<HashSet<MediaType>>>,
    /// Artificial latency per category.
    discover_delays: Arc<RwLock<HashMap<MediaType, Duration>>>,
    /// Search results, returned for any query.
    search_results: Arc<RwLock<Vec<MediaItem>>>,
    /// Trending results; filtered by the requested filter.
    trending: Arc<RwLock<Vec<MediaItem>>>,
    /// Details by (media type, id).
    details: Arc<RwLock<HashMap<(MediaType, u64), MediaDetails>>>,
    /// Recommendations by (media type, id).
    recommendations: Arc<RwLock<HashMap<(MediaType, u64), Vec<MediaItem>>>>,
    /// When set, every non-discover operation fails.
    unavailable: Arc<RwLock<bool>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedCatalogQuery>>>,
}

impl MockCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Discover Configuration
    // =========================================================================

    /// Set the items returned when discovering a category.
    pub async fn set_discover(&self, media_type: MediaType, items: Vec<MediaItem>) {
        self.discover.write().await.insert(media_type, items);
    }

    /// Make discovery of a category fail with an upstream error.
    pub async fn fail_discover(&self, media_type: MediaType) {
        self.discover_failures.write().await.insert(media_type);
    }

    /// Delay discovery of a category before answering.
    pub async fn delay_discover(&self, media_type: MediaType, delay: Duration) {
        self.discover_delays.write().await.insert(media_type, delay);
    }

    // =========================================================================
    // Other Operations
    // =========================================================================

    /// Set the items returned by search.
    pub async fn set_search_results(&self, items: Vec<MediaItem>) {
        *self.search_results.write().await = items;
    }

    /// Set the trending items.
    pub async fn set_trending(&self, items: Vec<MediaItem>) {
        *self.trending.write().await = items;
    }

    /// Add details for a title.
    pub async fn add_details(&self, details: MediaDetails) {
        self.details
            .write()
            .await
            .insert((details.media_type, details.id), details);
    }

    /// Set recommendations for a title.
    pub async fn set_recommendations(
        &self,
        media_type: MediaType,
        id: u64,
        items: Vec<MediaItem>,
    ) {
        self.recommendations
            .write()
            .await
            .insert((media_type, id), items);
    }

    /// Make every non-discover operation fail.
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    // =========================================================================
    // Assertions
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedCatalogQuery> {
        self.queries.read().await.clone()
    }

    /// Number of discover queries issued.
    pub async fn discover_count(&self) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|q| matches!(q, RecordedCatalogQuery::Discover { .. }))
            .count()
    }

    async fn record(&self, query: RecordedCatalogQuery) {
        self.queries.write().await.push(query);
    }

    async fn check_available(&self) -> Result<(), CatalogError> {
        if *self.unavailable.read().await {
            return Err(unavailable_error());
        }
        Ok(())
    }
}

fn unavailable_error() -> CatalogError {
    CatalogError::ApiError {
        status: 503,
        message: "mock catalog unavailable".to_string(),
    }
}

#[async_trait]
impl ContentCatalog for MockCatalog {
    async fn discover(
        &self,
        media_type: MediaType,
        genre_ids: &[u32],
    ) -> Result<Vec<MediaItem>, CatalogError> {
        self.record(RecordedCatalogQuery::Discover {
            media_type,
            genre_ids: genre_ids.to_vec(),
        })
        .await;

        let delay = self.discover_delays.read().await.get(&media_type).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.discover_failures.read().await.contains(&media_type) {
            return Err(unavailable_error());
        }

        Ok(self
            .discover
            .read()
            .await
            .get(&media_type)
            .cloned()
            .unwrap_or_default())
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<MediaItem>, CatalogError> {
        self.record(RecordedCatalogQuery::Search {
            query: query.to_string(),
            page,
        })
        .await;
        self.check_available().await?;

        Ok(self.search_results.read().await.clone())
    }

    async fn trending(
        &self,
        filter: MediaFilter,
        window: TimeWindow,
    ) -> Result<Vec<MediaItem>, CatalogError> {
        self.record(RecordedCatalogQuery::Trending { filter, window })
            .await;
        self.check_available().await?;

        Ok(self
            .trending
            .read()
            .await
            .iter()
            .filter(|item| filter.accepts(item.media_type))
            .cloned()
            .collect())
    }

    async fn details(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<MediaDetails, CatalogError> {
        self.record(RecordedCatalogQuery::Details { media_type, id })
            .await;
        self.check_available().await?;

        self.details
            .read()
            .await
            .get(&(media_type, id))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("{} ID {}", media_type, id)))
    }

    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Vec<MediaItem>, CatalogError> {
        self.record(RecordedCatalogQuery::Recommendations { media_type, id })
            .await;
        self.check_available().await?;

        Ok(self
            .recommendations
            .read()
            .await
            .get(&(media_type, id))
            .cloned()
            .unwrap_or_default())
    }
}
