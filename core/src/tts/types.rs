//! Synthesis request and result types.

use crate::{Result, VoxgateError};
use serde::{Deserialize, Serialize};

/// Voice used when the caller does not specify one.
pub const DEFAULT_VOICE_ID: &str = "en-US-Neural2-F";

/// Upper bound on synthesis text length, in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Inbound synthesis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Text to synthesize (non-empty, at most `MAX_TEXT_CHARS` characters)
    pub text: String,
    /// Voice identifier understood by the provider
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    /// Speed adjustment (nominal -10 to 10, passed through unvalidated)
    #[serde(default)]
    pub speed: i32,
    /// Pitch adjustment (nominal -20 to 20, passed through unvalidated)
    #[serde(default)]
    pub pitch: i32,
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

impl SynthesisRequest {
    /// Request for `text` with the default voice and neutral speed/pitch
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: default_voice_id(),
            speed: 0,
            pitch: 0,
        }
    }

    /// Check the text preconditions. Runs before any provider call.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(VoxgateError::InvalidArgument(
                "Text cannot be empty".to_string(),
            ));
        }
        if self.text.chars().count() > MAX_TEXT_CHARS {
            return Err(VoxgateError::InvalidArgument(
                "Text too long. Maximum 5000 characters.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Uniform synthesis outcome relayed back to the caller
///
/// `audio_url` is present exactly when `success` is true; `error` is present
/// exactly when it is false. `message` is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl SynthesisResult {
    /// The provider produced a usable audio URL.
    pub fn complete(audio_url: impl Into<String>) -> Self {
        Self {
            success: true,
            audio_url: Some(audio_url.into()),
            error: None,
            message: "Audio generated successfully".to_string(),
        }
    }

    /// Provider or transport failure, normalized.
    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            audio_url: None,
            error: Some(error.into()),
            message: message.into(),
        }
    }
}
