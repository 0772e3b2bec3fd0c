//! REST API endpoints.
//!
//! Axum-based HTTP API exposing player analysis, chart rendering and
//! roasts over the analysis pipeline.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::pipeline::PipelineError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound { code, .. } => (StatusCode::NOT_FOUND, *code),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "NO_USABLE_MATCH"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::NotFound { .. } => ApiError::NotFound {
                code: "PLAYER_NOT_FOUND",
                message: err.to_string(),
            },
            PipelineError::EmptyResult { .. } => ApiError::NotFound {
                code: "NO_MATCHES",
                message: err.to_string(),
            },
            PipelineError::NoUsableMatch { .. } => ApiError::Unprocessable(err.to_string()),
        }
    }
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET]);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(AllowOrigin::exact(value)),
        Err(e) => {
            warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
            layer.allow_origin(Any)
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/api/health", get(routes::health::health))
        .route(
            "/api/players/:name/:tag/analysis",
            get(routes::analysis::player_analysis),
        )
        .route("/api/players/:name/:tag/chart", get(routes::chart::player_chart))
        .route("/api/players/:name/:tag/roast", get(routes::roast::player_roast))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_mapping() {
        let cases = [
            (
                PipelineError::NotFound { riot_id: "A#1".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                PipelineError::EmptyResult { riot_id: "A#1".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                PipelineError::NoUsableMatch { riot_id: "A#1".into() },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_codes() {
        let err = ApiError::from(PipelineError::EmptyResult { riot_id: "A#1".into() });
        assert!(matches!(err, ApiError::NotFound { code: "NO_MATCHES", .. }));
        assert_eq!(err.to_string(), "No match history found for A#1");
    }
}
