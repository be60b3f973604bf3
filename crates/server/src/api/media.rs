//! Search, trending, genre and title handlers backed by the content catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use found404_core::{
    media::{Genre, MOVIE_GENRES, TV_GENRES},
    MediaDetails, MediaFilter, MediaItem, MediaType, TimeWindow,
};
use serde::{Deserialize, Serialize};

use super::error::{catalog_error, error_response, ApiError};
use crate::state::AppState;

/// Items per category on the home page.
const HOME_SECTION_SIZE: usize = 6;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingParams {
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub window: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub trending_movies: Vec<MediaItem>,
    pub trending_tv: Vec<MediaItem>,
}

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub movie: &'static [Genre],
    pub tv: &'static [Genre],
}

/// Parse an optional query parameter, falling back to the type's default.
fn parse_param<T>(raw: Option<&str>) -> Result<T, ApiError>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => value
            .to_ascii_lowercase()
            .parse()
            .map_err(|e: T::Err| error_response(StatusCode::BAD_REQUEST, e.to_string())),
    }
}

/// Unsupported media types in a path are unknown resources, not bad input.
fn parse_path_media_type(raw: &str) -> Result<MediaType, ApiError> {
    raw.parse()
        .map_err(|_| error_response(StatusCode::NOT_FOUND, format!("Unknown media type: {}", raw)))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/search
///
/// Multi search across movies and TV, optionally narrowed to one category.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MediaItem>>, ApiError> {
    let filter: MediaFilter = parse_param(params.media_type.as_deref())?;

    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let page = params.page.unwrap_or(1).max(1);
    let results = state
        .catalog()
        .search(query, page)
        .await
        .map_err(|e| catalog_error("search", e))?;

    Ok(Json(
        results
            .into_iter()
            .filter(|item| filter.accepts(item.media_type))
            .collect(),
    ))
}

/// GET /api/v1/trending
pub async fn trending(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendingParams>,
) -> Result<Json<Vec<MediaItem>>, ApiError> {
    let filter: MediaFilter = parse_param(params.media_type.as_deref())?;
    let window: TimeWindow = parse_param(params.window.as_deref())?;

    state
        .catalog()
        .trending(filter, window)
        .await
        .map(Json)
        .map_err(|e| catalog_error("trending", e))
}

/// GET /api/v1/home
///
/// Weekly trending titles split into a movie row and a TV row.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Json<HomeResponse>, ApiError> {
    let trending = state
        .catalog()
        .trending(MediaFilter::All, TimeWindow::Week)
        .await
        .map_err(|e| catalog_error("home", e))?;

    let (movies, shows): (Vec<_>, Vec<_>) = trending
        .into_iter()
        .partition(|item| item.media_type == MediaType::Movie);

    Ok(Json(HomeResponse {
        trending_movies: movies.into_iter().take(HOME_SECTION_SIZE).collect(),
        trending_tv: shows.into_iter().take(HOME_SECTION_SIZE).collect(),
    }))
}

/// GET /api/v1/genres
pub async fn genres() -> Json<GenresResponse> {
    Json(GenresResponse {
        movie: MOVIE_GENRES,
        tv: TV_GENRES,
    })
}

/// GET /api/v1/media/{media_type}/{id}
pub async fn get_details(
    State(state): State<Arc<AppState>>,
    Path((media_type, id)): Path<(String, u64)>,
) -> Result<Json<MediaDetails>, ApiError> {
    let media_type = parse_path_media_type(&media_type)?;

    state
        .catalog()
        .details(media_type, id)
        .await
        .map(Json)
        .map_err(|e| catalog_error("details", e))
}

/// GET /api/v1/media/{media_type}/{id}/recommendations
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Path((media_type, id)): Path<(String, u64)>,
) -> Result<Json<Vec<MediaItem>>, ApiError> {
    let media_type = parse_path_media_type(&media_type)?;

    let items = state
        .catalog()
        .recommendations(media_type, id)
        .await
        .map_err(|e| catalog_error("recommendations", e))?;

    Ok(Json(
        items
            .into_iter()
            .map(|mut item| {
                item.media_type = media_type;
                item
            })
            .collect(),
    ))
}
