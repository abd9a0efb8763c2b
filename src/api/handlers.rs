use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{FortuneResponse, HealthResponse, TtsRequest};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::fortune;
use crate::openai::SpeechRequest;

const TTS_MODEL: &str = "tts-1";
const TTS_VOICE: &str = "onyx";
const TTS_SPEED: f32 = 0.75;

pub async fn fortune(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FortuneResponse>, AppError> {
    tracing::info!("Received fortune request");

    let text = state
        .openai
        .chat_completion(&fortune::request())
        .await
        .map_err(AppError::Fortune)?;

    let fortune = text.trim().to_string();
    tracing::info!("Generated fortune: {}", fortune);

    Ok(Json(FortuneResponse {
        success: true,
        fortune,
    }))
}

pub async fn tts(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> Result<Response, AppError> {
    // Validate input
    if request.text.is_empty() {
        return Err(AppError::BadRequest("Text is required".into()));
    }

    tracing::info!("Generating speech for: {}", request.text);

    // Generate audio
    let audio = state
        .openai
        .speech(&SpeechRequest {
            model: TTS_MODEL.to_string(),
            input: request.text,
            voice: TTS_VOICE.to_string(),
            speed: TTS_SPEED,
        })
        .await
        .map_err(AppError::Speech)?;

    // Return audio response
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (header::CONTENT_LENGTH, audio.len().to_string()),
        ],
        audio,
    )
        .into_response())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Hippo server is running!".to_string(),
    })
}
