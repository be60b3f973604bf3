use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, media, middleware::metrics_middleware, moods};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Moods
        .route("/moods", get(moods::list_moods))
        .route("/moods/{mood}", get(moods::resolve_mood))
        // Browsing
        .route("/home", get(media::home))
        .route("/search", get(media::search))
        .route("/trending", get(media::trending))
        .route("/genres", get(media::genres))
        // Titles
        .route("/media/{media_type}/{id}", get(media::get_details))
        .route(
            "/media/{media_type}/{id}/recommendations",
            get(media::get_recommendations),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::get_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(metrics_middleware)),
        )
}
