pub mod config;
pub mod media;
pub mod metrics;
pub mod mood;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, MoodConfig,
    SanitizedConfig, ServerConfig, TmdbConfig,
};
pub use media::{
    CatalogError, ContentCatalog, MediaDetails, MediaFilter, MediaItem, MediaType, TimeWindow,
    TmdbClient,
};
pub use mood::{
    find_mood, MoodDefinition, MoodError, MoodRecommendations, MoodResolver, MoodScope,
    MAX_MOOD_RESULTS, MOODS,
};
