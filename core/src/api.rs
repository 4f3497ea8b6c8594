// Relay HTTP API server
//
// Exposes the synthesis endpoint plus liveness and discovery routes

use crate::config::ServerConfig;
use crate::tts::{MurfClient, SynthesisRequest};
use crate::{Result, VoxgateError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Relay HTTP server
pub struct ApiServer {
    config: ServerConfig,
    relay: Arc<MurfClient>,
}

impl ApiServer {
    pub fn new(config: ServerConfig, relay: MurfClient) -> Self {
        Self {
            config,
            relay: Arc::new(relay),
        }
    }

    /// Bind the configured address and serve until shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!(
            target: "api",
            addr = %addr,
            "Starting relay server"
        );

        let app = router(self.relay);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(
            target: "api",
            url = %format!("http://{}", addr),
            "Relay server ready"
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the relay router
///
/// Kept separate from `ApiServer` so tests can mount it on an ephemeral
/// listener
pub fn router(relay: Arc<MurfClient>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/tts/generate", post(generate_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(relay)
}

/// Request-scoped error, rendered as a `{"detail": ...}` body
struct ApiError(VoxgateError);

impl From<VoxgateError> for ApiError {
    fn from(err: VoxgateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The wire detail carries the bare message, without the enum's
        // display prefix
        let (status, detail) = match self.0 {
            VoxgateError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            VoxgateError::ConfigurationError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            err => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Service banner and endpoint listing
async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Voxgate TTS relay is running!",
        "endpoints": {
            "POST /tts/generate": "Generate audio from text using Murf TTS",
            "GET /health": "Liveness check",
        }
    }))
}

/// Liveness check
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "voxgate",
    }))
}

/// Relay a synthesis request to Murf
async fn generate_handler(
    State(relay): State<Arc<MurfClient>>,
    Json(request): Json<SynthesisRequest>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let result = relay.synthesize(&request).await?;
    Ok(Json(result))
}
