use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Load computation failed: {0}")]
    Computation(#[from] tokio::task::JoinError),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Computation(e) => {
                tracing::error!(error = %e, "Load computation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Load computation failed")
            }
            AppError::Encode(e) => {
                tracing::error!(error = %e, "Failed to encode response");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
