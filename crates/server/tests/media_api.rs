//! Browsing endpoint tests: health, config, search, trending, home, genres
//! and title lookups.

mod common;

use axum::http::StatusCode;
use found404_core::{testing::RecordedCatalogQuery, MediaFilter, MediaType, TimeWindow};
use serde_json::json;

use common::{fixtures, TestFixture};

// =============================================================================
// Basic API Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "status", json!("ok"));
}

#[tokio::test]
async fn test_config_hides_api_key() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/config").await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body["tmdb"], "api_key_configured", json!(true));
    assert!(response.body["tmdb"].get("api_key").is_none());
    assert_json_path!(response.body["moods"], "max_results", json!(20));
    assert!(!response.body.to_string().contains("test-api-key"));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();
    fixture.get("/api/v1/health").await;

    let response = fixture.get("/metrics").await;

    assert_status!(response, StatusCode::OK);
    let text = response.body.as_str().expect("plain text body");
    assert!(text.contains("found404_http_requests_total"));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_returns_movies_and_tv() {
    let fixture = TestFixture::new();
    let mut items = fixtures::movies(2);
    items.extend(fixtures::tv_shows(1));
    fixture.catalog.set_search_results(items).await;

    let response = fixture.get("/api/v1/search?q=heat&page=2").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 3);
    assert_eq!(
        fixture.catalog.recorded_queries().await,
        vec![RecordedCatalogQuery::Search {
            query: "heat".to_string(),
            page: 2,
        }]
    );
}

#[tokio::test]
async fn test_search_filters_by_media_type() {
    let fixture = TestFixture::new();
    let mut items = fixtures::movies(2);
    items.extend(fixtures::tv_shows(3));
    fixture.catalog.set_search_results(items).await;

    let response = fixture.get("/api/v1/search?q=office&media_type=tv").await;

    assert_status!(response, StatusCode::OK);
    let results = response.body.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r["media_type"] == "tv"));
}

#[tokio::test]
async fn test_blank_search_skips_upstream() {
    let fixture = TestFixture::new();
    fixture.catalog.set_search_results(fixtures::movies(2)).await;

    for path in ["/api/v1/search", "/api/v1/search?q=", "/api/v1/search?q=%20%20"] {
        let response = fixture.get(path).await;
        assert_status!(response, StatusCode::OK);
        assert_eq!(response.body, json!([]));
    }
    assert!(fixture.catalog.recorded_queries().await.is_empty());
}

#[tokio::test]
async fn test_search_upstream_failure_is_502() {
    let fixture = TestFixture::new();
    fixture.catalog.set_unavailable(true).await;

    let response = fixture.get("/api/v1/search?q=heat").await;

    assert_status!(response, StatusCode::BAD_GATEWAY);
    assert!(response.body["error"].as_str().is_some());
}

// =============================================================================
// Trending / Home / Genres
// =============================================================================

#[tokio::test]
async fn test_trending_defaults_to_all_week() {
    let fixture = TestFixture::new();
    let mut items = fixtures::movies(2);
    items.extend(fixtures::tv_shows(2));
    fixture.catalog.set_trending(items).await;

    let response = fixture.get("/api/v1/trending").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 4);
    assert_eq!(
        fixture.catalog.recorded_queries().await,
        vec![RecordedCatalogQuery::Trending {
            filter: MediaFilter::All,
            window: TimeWindow::Week,
        }]
    );
}

#[tokio::test]
async fn test_trending_with_filter_and_window() {
    let fixture = TestFixture::new();
    let mut items = fixtures::movies(2);
    items.extend(fixtures::tv_shows(2));
    fixture.catalog.set_trending(items).await;

    let response = fixture
        .get("/api/v1/trending?media_type=movie&window=day")
        .await;

    assert_status!(response, StatusCode::OK);
    let results = response.body.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r["media_type"] == "movie"));
    assert_eq!(
        fixture.catalog.recorded_queries().await,
        vec![RecordedCatalogQuery::Trending {
            filter: MediaFilter::Movie,
            window: TimeWindow::Day,
        }]
    );
}

#[tokio::test]
async fn test_trending_rejects_unknown_window() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/trending?window=month").await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert!(fixture.catalog.recorded_queries().await.is_empty());
}

#[tokio::test]
async fn test_home_splits_trending_six_each() {
    let fixture = TestFixture::new();
    let mut items = fixtures::movies(9);
    items.extend(fixtures::tv_shows(4));
    fixture.catalog.set_trending(items).await;

    let response = fixture.get("/api/v1/home").await;

    assert_status!(response, StatusCode::OK);
    let movies = response.body["trending_movies"].as_array().unwrap();
    let shows = response.body["trending_tv"].as_array().unwrap();
    assert_eq!(movies.len(), 6);
    assert_eq!(shows.len(), 4);
    assert!(movies.iter().all(|m| m["media_type"] == "movie"));
    assert!(shows.iter().all(|s| s["media_type"] == "tv"));
    assert_json_path!(movies[0], "id", json!(1));
}

#[tokio::test]
async fn test_genres_lists_both_tables() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/genres").await;

    assert_status!(response, StatusCode::OK);
    let movie = response.body["movie"].as_array().unwrap();
    let tv = response.body["tv"].as_array().unwrap();
    assert!(movie.contains(&json!({"id": 878, "name": "Science Fiction"})));
    assert!(tv.contains(&json!({"id": 10765, "name": "Sci-Fi & Fantasy"})));
}

// =============================================================================
// Titles
// =============================================================================

#[tokio::test]
async fn test_get_movie_details() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .add_details(fixtures::details(MediaType::Movie, 603, "The Matrix"))
        .await;

    let response = fixture.get("/api/v1/media/movie/603").await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "title", json!("The Matrix"));
    assert_json_path!(response.body, "media_type", json!("movie"));
    assert_json_path!(response.body, "runtime_minutes", json!(120));
    assert!(response.body.get("number_of_seasons").is_none());
}

#[tokio::test]
async fn test_get_tv_details() {
    let fixture = TestFixture::new();
    fixture
        .catalog
        .add_details(fixtures::details(MediaType::Tv, 1399, "Game of Thrones"))
        .await;

    let response = fixture.get("/api/v1/media/tv/1399").await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "number_of_seasons", json!(3));
}

#[tokio::test]
async fn test_missing_title_is_404() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/media/movie/999").await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert!(response.body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_unknown_media_type_is_404() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/media/person/287").await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert!(fixture.catalog.recorded_queries().await.is_empty());
}

#[tokio::test]
async fn test_details_upstream_failure_is_502() {
    let fixture = TestFixture::new();
    fixture.catalog.set_unavailable(true).await;

    let response = fixture.get("/api/v1/media/tv/1399").await;

    assert_status!(response, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_recommendations_are_tagged_with_media_type() {
    let fixture = TestFixture::new();
    // Upstream items carry the wrong tag; the route's media type wins.
    fixture
        .catalog
        .set_recommendations(MediaType::Tv, 1399, fixtures::movies(3))
        .await;

    let response = fixture.get("/api/v1/media/tv/1399/recommendations").await;

    assert_status!(response, StatusCode::OK);
    let results = response.body.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r["media_type"] == "tv"));
}
