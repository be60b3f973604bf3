//! Testing utilities and mock implementations.
//!
//! This module provides a mock content catalog so the mood resolver and the
//! HTTP API can be exercised without reaching TMDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use found404_core::testing::{fixtures, MockCatalog};
//!
//! let catalog = MockCatalog::new();
//! catalog.set_discover(MediaType::Movie, fixtures::movies(20)).await;
//!
//! // Use in MoodResolver / AppState...
//! ```

mod mock_catalog;

pub use mock_catalog::{MockCatalog, RecordedCatalogQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::media::{MediaDetails, MediaItem, MediaType};

    /// Create a test movie with reasonable defaults.
    pub fn movie(id: u64, title: &str) -> MediaItem {
        MediaItem {
            id,
            title: title.to_string(),
            media_type: MediaType::Movie,
            overview: Some(format!("A movie about {}.", title.to_lowercase())),
            poster_path: Some(format!("/poster-{}.jpg", id)),
            backdrop_path: None,
            vote_average: Some(7.5),
            release_date: Some("2021-06-15".to_string()),
            genre_ids: vec![35, 18],
        }
    }

    /// Create a test TV show with reasonable defaults.
    pub fn tv_show(id: u64, name: &str) -> MediaItem {
        MediaItem {
            id,
            title: name.to_string(),
            media_type: MediaType::Tv,
            overview: Some(format!("A TV series about {}.", name.to_lowercase())),
            poster_path: Some(format!("/poster-{}.jpg", id)),
            backdrop_path: None,
            vote_average: Some(8.0),
            release_date: Some("2020-01-01".to_string()),
            genre_ids: vec![35, 18],
        }
    }

    /// `count` movies with ids 1..=count.
    pub fn movies(count: u64) -> Vec<MediaItem> {
        (1..=count)
            .map(|i| movie(i, &format!("Movie {}", i)))
            .collect()
    }

    /// `count` TV shows with ids 1..=count.
    ///
    /// IDs deliberately overlap with [`movies`]; identity is (media type, id).
    pub fn tv_shows(count: u64) -> Vec<MediaItem> {
        (1..=count)
            .map(|i| tv_show(i, &format!("Show {}", i)))
            .collect()
    }

    /// Create test details for a title.
    pub fn details(media_type: MediaType, id: u64, title: &str) -> MediaDetails {
        let tv = media_type == MediaType::Tv;
        MediaDetails {
            id,
            title: title.to_string(),
            media_type,
            tagline: Some(format!("{} tagline", title)),
            overview: Some(format!("All about {}.", title.to_lowercase())),
            status: Some(if tv { "Ended" } else { "Released" }.to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: Some("/backdrop.jpg".to_string()),
            vote_average: Some(8.1),
            release_date: Some("2019-05-01".to_string()),
            runtime_minutes: Some(if tv { 45 } else { 120 }),
            genres: vec!["Drama".to_string()],
            number_of_seasons: tv.then_some(3),
            number_of_episodes: tv.then_some(30),
        }
    }
}
