use super::{types::Config, ConfigError};
use crate::mood::MAX_MOOD_RESULTS;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - TMDB API key is present
/// - Mood result bound and query timeout are usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.tmdb.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tmdb.api_key must be set".to_string(),
        ));
    }

    if config.moods.max_results == 0 || config.moods.max_results > MAX_MOOD_RESULTS {
        return Err(ConfigError::ValidationError(format!(
            "moods.max_results must be between 1 and {}",
            MAX_MOOD_RESULTS
        )));
    }

    if config.moods.query_timeout_ms == 0 {
        return Err(ConfigError::ValidationError(
            "moods.query_timeout_ms cannot be 0".to_string(),
        ));
    }

    Ok(())
}
