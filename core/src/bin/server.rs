use tracing::{info, warn};
use voxgate_core::{ApiServer, MurfClient, MurfConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging / tracing
    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,voxgate_core=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let murf_config = MurfConfig::from_env();
    if murf_config.api_key.is_none() {
        // The server still comes up; synthesis requests report the missing
        // key as HTTP 500 until it is provided
        warn!(
            target: "server",
            "MURF_API_KEY is not set, synthesis requests will fail"
        );
    }

    let server_config = ServerConfig::from_env();
    info!(
        target: "server",
        host = %server_config.host,
        port = server_config.port,
        "Starting Voxgate"
    );

    let relay = MurfClient::with_config(murf_config);
    ApiServer::new(server_config, relay).serve().await?;

    Ok(())
}
