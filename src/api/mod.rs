pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    // Absent and empty are rejected alike, so default rather than fail the parse.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FortuneResponse {
    pub success: bool,
    pub fortune: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
