//! The static mood table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::media::{genre_name, MediaType, ParseKindError};

/// Which content categories a mood may draw from, or which ones a caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodScope {
    Movie,
    Tv,
    #[default]
    Both,
}

impl MoodScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodScope::Movie => "movie",
            MoodScope::Tv => "tv",
            MoodScope::Both => "both",
        }
    }

    pub fn includes(&self, media_type: MediaType) -> bool {
        match self {
            MoodScope::Both => true,
            MoodScope::Movie => media_type == MediaType::Movie,
            MoodScope::Tv => media_type == MediaType::Tv,
        }
    }

    /// Categories allowed by both scopes, movie before TV.
    ///
    /// Disjoint scopes yield an empty set.
    pub fn intersect(&self, other: MoodScope) -> Vec<MediaType> {
        MediaType::ALL
            .into_iter()
            .filter(|media_type| self.includes(*media_type) && other.includes(*media_type))
            .collect()
    }
}

impl fmt::Display for MoodScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodScope {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MoodScope::Movie),
            "tv" => Ok(MoodScope::Tv),
            "both" => Ok(MoodScope::Both),
            _ => Err(ParseKindError {
                kind: "media type",
                value: s.to_string(),
            }),
        }
    }
}

/// A mood and the genres it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Genres every recommended title must carry. Never empty.
    pub genre_ids: &'static [u32],
    pub scope: MoodScope,
}

impl MoodDefinition {
    /// Movie genre names for display.
    pub fn genre_names(&self) -> Vec<&'static str> {
        self.genre_ids
            .iter()
            .filter_map(|id| genre_name(MediaType::Movie, *id))
            .collect()
    }
}

/// Every mood, in display order.
pub const MOODS: &[MoodDefinition] = &[
    MoodDefinition {
        key: "happy",
        title: "Happy",
        description: "Comedies and feel-good content to brighten your day",
        genre_ids: &[35, 10751, 12],
        scope: MoodScope::Both,
    },
    MoodDefinition {
        key: "sad",
        title: "Sad",
        description: "Dramas and emotional stories for a good cry",
        genre_ids: &[18, 10749],
        scope: MoodScope::Both,
    },
    MoodDefinition {
        key: "excited",
        title: "Excited",
        description: "Action-packed adventures to get your adrenaline pumping",
        genre_ids: &[28, 12, 14],
        scope: MoodScope::Both,
    },
    MoodDefinition {
        key: "scared",
        title: "Scared",
        description: "Spine-tingling horrors and thrillers for a frightful night",
        genre_ids: &[27, 9648, 53],
        scope: MoodScope::Both,
    },
    MoodDefinition {
        key: "relaxed",
        title: "Relaxed",
        description: "Light-hearted and easy-watching content to unwind",
        genre_ids: &[35, 16, 10751],
        scope: MoodScope::Both,
    },
    MoodDefinition {
        key: "bored",
        title: "Bored",
        description: "Exciting and engaging movies to break the monotony",
        genre_ids: &[28, 12, 878],
        scope: MoodScope::Both,
    },
    MoodDefinition {
        key: "romantic",
        title: "Romantic",
        description: "Love stories and rom-coms to make your heart flutter",
        genre_ids: &[10749, 35],
        scope: MoodScope::Both,
    },
    MoodDefinition {
        key: "thoughtful",
        title: "Thoughtful",
        description: "Thought-provoking dramas and documentaries",
        genre_ids: &[18, 36, 99],
        scope: MoodScope::Both,
    },
];

static MOOD_INDEX: Lazy<HashMap<&'static str, &'static MoodDefinition>> =
    Lazy::new(|| MOODS.iter().map(|m| (m.key, m)).collect());

/// Look up a mood by key, ignoring case and surrounding whitespace.
pub fn find_mood(key: &str) -> Option<&'static MoodDefinition> {
    MOOD_INDEX
        .get(key.trim().to_lowercase().as_str())
        .copied()
}
