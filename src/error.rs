use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::fortune;
use crate::openai::OpenAiError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Fortune generation failed: {0}")]
    Fortune(OpenAiError),

    #[error("Speech generation failed: {0}")]
    Speech(OpenAiError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Fortune(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                fortune::user_message(e).to_string(),
            ),
            AppError::Speech(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate speech".to_string(),
            ),
        };

        tracing::error!("Request failed: {}", self);

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}
