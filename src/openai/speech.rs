use serde::Serialize;

use super::{error_from_response, OpenAiClient, OpenAiError};

/// A text-to-speech synthesis request.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub speed: f32,
}

impl OpenAiClient {
    /// Synthesize speech and return the raw audio bytes.
    pub async fn speech(&self, request: &SpeechRequest) -> Result<Vec<u8>, OpenAiError> {
        let response = self.post("/v1/audio/speech").json(request).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(response.bytes().await?.to_vec())
    }
}
