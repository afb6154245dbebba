use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Please fill in all required fields.")]
    IncompleteInput,

    #[error("Error generating study plan: {0}")]
    Generation(String),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::IncompleteInput => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Please fill in all required fields.".to_string(),
            ),
            AppError::Generation(msg) => {
                error!("generation failed: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Error generating study plan: {}", msg),
                )
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
