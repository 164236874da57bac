//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use foodbank_config::Environment;
use foodbank_db::Database;

/// Application state shared across handlers.
pub struct AppState {
    pub database: Database,
    pub environment: Environment,
}

/// Errors surfaced by the bootstrap endpoints.
pub enum ApiError {
    NotFound,
    Unavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database unavailable".to_string(),
            ),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Reports whether the database answers.
#[tracing::instrument(skip(state))]
pub async fn status(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = state.database.ping().await {
        tracing::warn!("Database ping failed: {}", e);
        return Err(ApiError::Unavailable);
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "database": state.database.backend(),
        "environment": state.environment,
    })))
}

/// Fallback for unknown paths under `/api`.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
