//! Mood based recommendations.
//!
//! A mood maps to a fixed list of genres. Resolving a mood queries the
//! content catalog once per eligible category, concurrently, and returns a
//! shuffled, bounded sample of the merged results.

mod definitions;
mod resolver;

pub use definitions::{find_mood, MoodDefinition, MoodScope, MOODS};
pub use resolver::{MoodRecommendations, MoodResolver, MAX_MOOD_RESULTS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoodError {
    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}
