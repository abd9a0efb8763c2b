use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod error;
mod fortune;
mod openai;

use api::routes::{create_router, AppState};
use openai::OpenAiClient;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a number");
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; fortune and speech requests will fail");
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Hippo Fortune Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Static directory: {}", static_dir);

    // Create OpenAI client
    let openai = match std::env::var("OPENAI_BASE_URL") {
        Ok(base_url) => OpenAiClient::with_base_url(api_key, &base_url),
        Err(_) => OpenAiClient::new(api_key),
    };

    // Create app state
    let state = Arc::new(AppState { openai });

    // Create router
    let app = create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
