//! Turns a mood and a media type filter into a randomized recommendation list.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use rand::seq::SliceRandom;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::definitions::{find_mood, MoodDefinition, MoodScope};
use super::MoodError;
use crate::config::MoodConfig;
use crate::media::{CatalogError, ContentCatalog, MediaItem, MediaType};
use crate::metrics::{MOOD_CATEGORY_FAILURES, MOOD_RESOLUTIONS, MOOD_RESULTS};

/// Hard ceiling on items returned by a single resolution.
pub const MAX_MOOD_RESULTS: usize = 20;

/// Outcome of a mood resolution.
#[derive(Debug, Clone, Serialize)]
pub struct MoodRecommendations {
    /// Canonical (lowercase) mood key.
    pub mood: &'static str,
    /// Scope the caller asked for.
    pub media_type: MoodScope,
    pub results: Vec<MediaItem>,
    /// Every category query failed; the empty result says nothing about the mood.
    pub degraded: bool,
    /// Categories whose query failed or timed out.
    pub failed_categories: Vec<MediaType>,
}

/// Resolves moods against a content catalog.
///
/// Holds no per-request state, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct MoodResolver {
    catalog: Arc<dyn ContentCatalog>,
    query_timeout: Duration,
    max_results: usize,
}

impl MoodResolver {
    pub fn new(catalog: Arc<dyn ContentCatalog>, config: &MoodConfig) -> Self {
        Self {
            catalog,
            query_timeout: Duration::from_millis(config.query_timeout_ms),
            max_results: config.max_results.clamp(1, MAX_MOOD_RESULTS),
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Resolve `mood` for the requested scope.
    ///
    /// Only an unknown mood is an error. Failed category queries are dropped
    /// from the merge and reported through `failed_categories`/`degraded`.
    pub async fn resolve(
        &self,
        mood: &str,
        requested: MoodScope,
    ) -> Result<MoodRecommendations, MoodError> {
        let Some(definition) = find_mood(mood) else {
            MOOD_RESOLUTIONS.with_label_values(&["unknown_mood"]).inc();
            return Err(MoodError::UnknownMood(mood.to_string()));
        };

        Ok(self.resolve_definition(definition, requested).await)
    }

    /// Resolve an already looked-up definition.
    pub async fn resolve_definition(
        &self,
        definition: &'static MoodDefinition,
        requested: MoodScope,
    ) -> MoodRecommendations {
        let categories = definition.scope.intersect(requested);
        if categories.is_empty() {
            debug!(
                mood = definition.key,
                mood_scope = %definition.scope,
                requested = %requested,
                "Requested media type outside mood scope"
            );
            return self.finish(definition, requested, Vec::new(), Vec::new(), false);
        }

        let queries = categories
            .iter()
            .map(|&media_type| self.query_category(definition, media_type));
        let outcomes = join_all(queries).await;

        let mut merged = Vec::new();
        let mut failed = Vec::new();
        for (media_type, outcome) in outcomes {
            match outcome {
                Ok(items) => merged.extend(items.into_iter().map(|mut item| {
                    item.media_type = media_type;
                    item
                })),
                Err(e) => {
                    let reason = failure_reason(&e);
                    MOOD_CATEGORY_FAILURES
                        .with_label_values(&[media_type.as_str(), reason])
                        .inc();
                    warn!(
                        mood = definition.key,
                        media_type = %media_type,
                        error = %e,
                        "Mood category query failed"
                    );
                    failed.push(media_type);
                }
            }
        }

        let degraded = failed.len() == categories.len();

        merged.shuffle(&mut rand::rng());
        merged.truncate(self.max_results);

        self.finish(definition, requested, merged, failed, degraded)
    }

    /// Discover one category under the per-query time bound.
    async fn query_category(
        &self,
        definition: &MoodDefinition,
        media_type: MediaType,
    ) -> (MediaType, Result<Vec<MediaItem>, CatalogError>) {
        let result = match timeout(
            self.query_timeout,
            self.catalog.discover(media_type, definition.genre_ids),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(CatalogError::Timeout {
                timeout_ms: self.query_timeout.as_millis() as u64,
            }),
        };
        (media_type, result)
    }

    fn finish(
        &self,
        definition: &'static MoodDefinition,
        requested: MoodScope,
        results: Vec<MediaItem>,
        failed_categories: Vec<MediaType>,
        degraded: bool,
    ) -> MoodRecommendations {
        let outcome = if degraded {
            "degraded"
        } else if results.is_empty() {
            "empty"
        } else {
            "ok"
        };
        MOOD_RESOLUTIONS.with_label_values(&[outcome]).inc();
        MOOD_RESULTS.observe(results.len() as f64);

        debug!(
            mood = definition.key,
            requested = %requested,
            results = results.len(),
            degraded,
            "Mood resolved"
        );

        MoodRecommendations {
            mood: definition.key,
            media_type: requested,
            results,
            degraded,
            failed_categories,
        }
    }
}

/// Metric label for a failed category query.
fn failure_reason(e: &CatalogError) -> &'static str {
    match e {
        CatalogError::Timeout { .. } => "timeout",
        CatalogError::HttpError(err) if err.is_timeout() => "timeout",
        _ => "error",
    }
}
