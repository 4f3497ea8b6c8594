// Service configuration
//
// Plain structs with hardcoded defaults; `from_env()` overlays the
// environment on top of them. Nothing else reads the environment.

/// HTTP server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("VOXGATE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("VOXGATE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }
}

/// Configuration for the Murf provider client
#[derive(Clone, Debug)]
pub struct MurfConfig {
    /// Synthesis endpoint
    pub api_endpoint: String,
    /// Bearer token; a missing key fails each request with a configuration
    /// error instead of preventing startup
    pub api_key: Option<String>,
    /// Timeout for provider requests in milliseconds
    pub timeout_ms: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for MurfConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.murf.ai/v1/tts/generate".to_string(),
            api_key: None,
            timeout_ms: 30_000,
            user_agent: "voxgate/0.1".to_string(),
        }
    }
}

impl MurfConfig {
    pub fn from_env() -> Self {
        Self {
            api_endpoint: std::env::var("MURF_API_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "https://api.murf.ai/v1/tts/generate".to_string()),
            api_key: std::env::var("MURF_API_KEY").ok().filter(|s| !s.is_empty()),
            timeout_ms: std::env::var("MURF_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30_000),
            user_agent: "voxgate/0.1".to_string(),
        }
    }
}
