//! TMDB genre name tables.
//!
//! Movie and TV genres share most IDs but not all of them (TV folds action
//! and adventure into 10759, science fiction and fantasy into 10765).

use serde::Serialize;

use super::MediaType;

/// A genre ID with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub id: u32,
    pub name: &'static str,
}

const fn genre(id: u32, name: &'static str) -> Genre {
    Genre { id, name }
}

pub const MOVIE_GENRES: &[Genre] = &[
    genre(28, "Action"),
    genre(12, "Adventure"),
    genre(16, "Animation"),
    genre(35, "Comedy"),
    genre(80, "Crime"),
    genre(99, "Documentary"),
    genre(18, "Drama"),
    genre(10751, "Family"),
    genre(14, "Fantasy"),
    genre(36, "History"),
    genre(27, "Horror"),
    genre(10402, "Music"),
    genre(9648, "Mystery"),
    genre(10749, "Romance"),
    genre(878, "Science Fiction"),
    genre(10770, "TV Movie"),
    genre(53, "Thriller"),
    genre(10752, "War"),
    genre(37, "Western"),
];

pub const TV_GENRES: &[Genre] = &[
    genre(10759, "Action & Adventure"),
    genre(16, "Animation"),
    genre(35, "Comedy"),
    genre(80, "Crime"),
    genre(99, "Documentary"),
    genre(18, "Drama"),
    genre(10751, "Family"),
    genre(10762, "Kids"),
    genre(9648, "Mystery"),
    genre(10763, "News"),
    genre(10764, "Reality"),
    genre(10765, "Sci-Fi & Fantasy"),
    genre(10766, "Soap"),
    genre(10767, "Talk"),
    genre(10768, "War & Politics"),
    genre(37, "Western"),
];

/// All genres known for a media type.
pub fn genres_for(media_type: MediaType) -> &'static [Genre] {
    match media_type {
        MediaType::Movie => MOVIE_GENRES,
        MediaType::Tv => TV_GENRES,
    }
}

/// Display name for a genre ID, if the media type knows it.
pub fn genre_name(media_type: MediaType, id: u32) -> Option<&'static str> {
    genres_for(media_type)
        .iter()
        .find(|g| g.id == id)
        .map(|g| g.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_name_lookup() {
        assert_eq!(genre_name(MediaType::Movie, 35), Some("Comedy"));
        assert_eq!(genre_name(MediaType::Tv, 10765), Some("Sci-Fi & Fantasy"));
        assert_eq!(genre_name(MediaType::Tv, 28), None);
    }

    #[test]
    fn test_genre_ids_unique_per_table() {
        for media_type in MediaType::ALL {
            let table = genres_for(media_type);
            for (i, g) in table.iter().enumerate() {
                assert!(
                    table[i + 1..].iter().all(|other| other.id != g.id),
                    "duplicate genre {} in {} table",
                    g.id,
                    media_type
                );
            }
        }
    }
}
