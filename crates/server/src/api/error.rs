//! JSON error bodies shared by the API handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use found404_core::CatalogError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every fallible handler.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map an upstream failure to a response.
///
/// A missing title is the caller's 404; anything else means the upstream
/// source misbehaved and surfaces as 502.
pub fn catalog_error(operation: &str, e: CatalogError) -> ApiError {
    match e {
        CatalogError::NotFound(what) => {
            error_response(StatusCode::NOT_FOUND, format!("Not found: {}", what))
        }
        e => {
            warn!(operation, error = %e, "Upstream catalog request failed");
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}
