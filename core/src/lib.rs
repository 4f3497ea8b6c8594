// Voxgate Core Library
// HTTP relay for Murf text-to-speech synthesis

pub mod api;
pub mod config;
pub mod tts;

// Export core types
pub use api::ApiServer;
pub use config::{MurfConfig, ServerConfig};
pub use tts::{MurfClient, SynthesisRequest, SynthesisResult};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxgateError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VoxgateError>;
