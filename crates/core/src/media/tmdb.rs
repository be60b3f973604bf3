//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::types::{MediaDetails, MediaFilter, MediaItem, MediaType, TimeWindow};
use super::{CatalogError, ContentCatalog};
use crate::config::TmdbConfig;
use crate::metrics::{EXTERNAL_SERVICE_DURATION, EXTERNAL_SERVICE_REQUESTS};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const SERVICE: &str = "tmdb";

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.trim().is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request and decode the JSON body, recording metrics.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let start = Instant::now();
        let result = self.send_get(path, params).await;

        let status = if result.is_ok() { "success" } else { "error" };
        EXTERNAL_SERVICE_REQUESTS
            .with_label_values(&[SERVICE, operation, status])
            .inc();
        EXTERNAL_SERVICE_DURATION
            .with_label_values(&[SERVICE, operation])
            .observe(start.elapsed().as_secs_f64());

        result
    }

    async fn send_get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => {
                return Err(CatalogError::NotConfigured(
                    "Invalid TMDB API key".to_string(),
                ))
            }
            StatusCode::NOT_FOUND => return Err(CatalogError::NotFound(path.to_string())),
            StatusCode::TOO_MANY_REQUESTS => return Err(CatalogError::RateLimitExceeded),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(CatalogError::ApiError {
                    status: status.as_u16(),
                    message: body,
                });
            }
            _ => {}
        }

        response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse response from {}: {}", path, e))
        })
    }
}

#[async_trait]
impl ContentCatalog for TmdbClient {
    async fn discover(
        &self,
        media_type: MediaType,
        genre_ids: &[u32],
    ) -> Result<Vec<MediaItem>, CatalogError> {
        let with_genres = genre_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        debug!(media_type = %media_type, genres = %with_genres, "TMDB discover");

        let page: TmdbPage<TmdbListItem> = self
            .get_json(
                "discover",
                &format!("/discover/{}", media_type),
                &[
                    ("with_genres", with_genres),
                    ("sort_by", "popularity.desc".to_string()),
                ],
            )
            .await?;

        Ok(page
            .results
            .into_iter()
            .map(|r| r.into_item(media_type))
            .collect())
    }

    async fn search(&self, query: &str, page: u32) -> Result<Vec<MediaItem>, CatalogError> {
        debug!("TMDB multi search: query='{}', page={}", query, page);

        let results: TmdbPage<TmdbListItem> = self
            .get_json(
                "search",
                "/search/multi",
                &[("query", query.to_string()), ("page", page.max(1).to_string())],
            )
            .await?;

        Ok(results
            .results
            .into_iter()
            .filter_map(TmdbListItem::into_tagged_item)
            .collect())
    }

    async fn trending(
        &self,
        filter: MediaFilter,
        window: TimeWindow,
    ) -> Result<Vec<MediaItem>, CatalogError> {
        debug!(filter = filter.as_str(), window = window.as_str(), "TMDB trending");

        let page: TmdbPage<TmdbListItem> = self
            .get_json(
                "trending",
                &format!("/trending/{}/{}", filter.as_str(), window.as_str()),
                &[],
            )
            .await?;

        let items = match filter.media_type() {
            Some(media_type) => page
                .results
                .into_iter()
                .map(|r| r.into_item(media_type))
                .collect(),
            None => page
                .results
                .into_iter()
                .filter_map(TmdbListItem::into_tagged_item)
                .collect(),
        };

        Ok(items)
    }

    async fn details(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<MediaDetails, CatalogError> {
        debug!("TMDB get {}: id={}", media_type, id);

        let details: TmdbDetails = self
            .get_json("details", &format!("/{}/{}", media_type, id), &[])
            .await
            .map_err(|e| match e {
                CatalogError::NotFound(_) => {
                    CatalogError::NotFound(format!("{} ID {}", media_type, id))
                }
                other => other,
            })?;

        Ok(details.into_details(media_type))
    }

    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Vec<MediaItem>, CatalogError> {
        debug!("TMDB recommendations for {}: id={}", media_type, id);

        let page: TmdbPage<TmdbListItem> = self
            .get_json(
                "recommendations",
                &format!("/{}/{}/recommendations", media_type, id),
                &[],
            )
            .await?;

        Ok(page
            .results
            .into_iter()
            .map(|r| r.into_item(media_type))
            .collect())
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// List entry shared by discover, search, trending and recommendations.
/// Movies carry `title`/`release_date`, TV carries `name`/`first_air_date`.
#[derive(Debug, Deserialize)]
struct TmdbListItem {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    media_type: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f32>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct TmdbDetails {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    tagline: Option<String>,
    overview: Option<String>,
    status: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    vote_average: Option<f32>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    episode_run_time: Vec<u32>,
    #[serde(default)]
    genres: Vec<TmdbGenre>,
    number_of_seasons: Option<u32>,
    number_of_episodes: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

// ============================================================================
// Conversions
// ============================================================================

/// TMDB sends empty strings for unknown dates and taglines.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TmdbListItem {
    fn into_item(self, media_type: MediaType) -> MediaItem {
        let (title, date) = match media_type {
            MediaType::Movie => (self.title.or(self.name), self.release_date),
            MediaType::Tv => (self.name.or(self.title), self.first_air_date),
        };

        MediaItem {
            id: self.id,
            title: title.unwrap_or_default(),
            media_type,
            overview: non_empty(self.overview),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            vote_average: self.vote_average,
            release_date: non_empty(date),
            genre_ids: self.genre_ids,
        }
    }

    /// Use the upstream `media_type` field; entries that are neither movies
    /// nor TV (people) are dropped.
    fn into_tagged_item(self) -> Option<MediaItem> {
        let media_type = self.media_type.as_deref()?.parse::<MediaType>().ok()?;
        Some(self.into_item(media_type))
    }
}

impl TmdbDetails {
    fn into_details(self, media_type: MediaType) -> MediaDetails {
        let (title, date, runtime) = match media_type {
            MediaType::Movie => (self.title.or(self.name), self.release_date, self.runtime),
            MediaType::Tv => (
                self.name.or(self.title),
                self.first_air_date,
                self.episode_run_time.first().copied(),
            ),
        };

        MediaDetails {
            id: self.id,
            title: title.unwrap_or_default(),
            media_type,
            tagline: non_empty(self.tagline),
            overview: non_empty(self.overview),
            status: self.status,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            vote_average: self.vote_average,
            release_date: non_empty(date),
            runtime_minutes: runtime,
            genres: self.genres.into_iter().map(|g| g.name).collect(),
            number_of_seasons: self.number_of_seasons,
            number_of_episodes: self.number_of_episodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = TmdbClient::new(TmdbConfig {
            api_key: "".to_string(),
            base_url: None,
            timeout_secs: 5,
        });
        assert!(matches!(result, Err(CatalogError::NotConfigured(_))));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = TmdbClient::new(TmdbConfig {
            api_key: "key".to_string(),
            base_url: Some("http://localhost:9000/3/".to_string()),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/3");
    }

    #[test]
    fn test_movie_list_item_conversion() {
        let raw = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A computer hacker...",
            "poster_path": "/poster.jpg",
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "genre_ids": [28, 878]
        }"#;
        let result: TmdbListItem = serde_json::from_str(raw).unwrap();

        let item = result.into_item(MediaType::Movie);
        assert_eq!(item.id, 603);
        assert_eq!(item.title, "The Matrix");
        assert_eq!(item.media_type, MediaType::Movie);
        assert_eq!(item.release_date.as_deref(), Some("1999-03-30"));
        assert_eq!(item.genre_ids, vec![28, 878]);
    }

    #[test]
    fn test_tv_list_item_uses_name_and_first_air_date() {
        let raw = r#"{
            "id": 1396,
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "release_date": ""
        }"#;
        let result: TmdbListItem = serde_json::from_str(raw).unwrap();

        let item = result.into_item(MediaType::Tv);
        assert_eq!(item.title, "Breaking Bad");
        assert_eq!(item.release_date.as_deref(), Some("2008-01-20"));
        assert!(item.genre_ids.is_empty());
    }

    #[test]
    fn test_multi_search_page_drops_people() {
        let raw = r#"{
            "page": 1,
            "results": [
                {"id": 1, "media_type": "movie", "title": "Heat"},
                {"id": 2, "media_type": "person", "name": "Al Pacino"},
                {"id": 3, "media_type": "tv", "name": "The Wire"}
            ]
        }"#;
        let page: TmdbPage<TmdbListItem> = serde_json::from_str(raw).unwrap();

        let items: Vec<MediaItem> = page
            .results
            .into_iter()
            .filter_map(TmdbListItem::into_tagged_item)
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].key(), (MediaType::Movie, 1));
        assert_eq!(items[1].key(), (MediaType::Tv, 3));
        assert_eq!(items[1].title, "The Wire");
    }

    #[test]
    fn test_page_without_results_is_empty() {
        let page: TmdbPage<TmdbListItem> = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_movie_details_conversion() {
        let raw = r#"{
            "id": 603,
            "title": "The Matrix",
            "tagline": "Welcome to the Real World.",
            "status": "Released",
            "release_date": "1999-03-30",
            "runtime": 136,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "vote_average": 8.2
        }"#;
        let details: TmdbDetails = serde_json::from_str(raw).unwrap();

        let details = details.into_details(MediaType::Movie);
        assert_eq!(details.runtime_minutes, Some(136));
        assert_eq!(details.genres, vec!["Action", "Science Fiction"]);
        assert_eq!(details.tagline.as_deref(), Some("Welcome to the Real World."));
        assert!(details.number_of_seasons.is_none());
    }

    #[test]
    fn test_tv_details_conversion() {
        let raw = r#"{
            "id": 1396,
            "name": "Breaking Bad",
            "tagline": "",
            "first_air_date": "2008-01-20",
            "episode_run_time": [45, 47],
            "number_of_seasons": 5,
            "number_of_episodes": 62,
            "genres": [{"id": 18, "name": "Drama"}]
        }"#;
        let details: TmdbDetails = serde_json::from_str(raw).unwrap();

        let details = details.into_details(MediaType::Tv);
        assert_eq!(details.title, "Breaking Bad");
        assert_eq!(details.release_date.as_deref(), Some("2008-01-20"));
        assert_eq!(details.runtime_minutes, Some(45));
        assert_eq!(details.number_of_seasons, Some(5));
        assert!(details.tagline.is_none());
    }
}
