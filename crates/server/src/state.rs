use found404_core::{Config, ContentCatalog, MoodResolver, SanitizedConfig};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn ContentCatalog>,
    resolver: MoodResolver,
}

impl AppState {
    /// Build state around `catalog`; the resolver shares the same catalog.
    pub fn new(config: Config, catalog: Arc<dyn ContentCatalog>) -> Self {
        let resolver = MoodResolver::new(Arc::clone(&catalog), &config.moods);
        Self {
            config,
            catalog,
            resolver,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> &dyn ContentCatalog {
        self.catalog.as_ref()
    }

    pub fn resolver(&self) -> &MoodResolver {
        &self.resolver
    }
}
