//! Mood API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use found404_core::{MoodDefinition, MoodError, MoodRecommendations, MoodScope, MOODS};
use serde::{Deserialize, Serialize};

use super::error::{error_response, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MoodParams {
    /// `movie`, `tv` or `both` (default).
    #[serde(default)]
    pub media_type: Option<String>,
}

/// A mood as listed by `GET /moods`.
#[derive(Debug, Serialize)]
pub struct MoodSummary {
    #[serde(flatten)]
    pub definition: &'static MoodDefinition,
    pub genre_names: Vec<&'static str>,
}

/// GET /api/v1/moods
pub async fn list_moods() -> Json<Vec<MoodSummary>> {
    Json(
        MOODS
            .iter()
            .map(|definition| MoodSummary {
                definition,
                genre_names: definition.genre_names(),
            })
            .collect(),
    )
}

/// GET /api/v1/moods/{mood}
///
/// Resolve a mood into a shuffled recommendation list.
pub async fn resolve_mood(
    State(state): State<Arc<AppState>>,
    Path(mood): Path<String>,
    Query(params): Query<MoodParams>,
) -> Result<Json<MoodRecommendations>, ApiError> {
    let scope = match params.media_type.as_deref() {
        None | Some("") => MoodScope::default(),
        Some(raw) => raw
            .parse::<MoodScope>()
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?,
    };

    match state.resolver().resolve(&mood, scope).await {
        Ok(recommendations) => Ok(Json(recommendations)),
        Err(e @ MoodError::UnknownMood(_)) => {
            Err(error_response(StatusCode::NOT_FOUND, e.to_string()))
        }
    }
}
